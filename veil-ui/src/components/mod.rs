//! Dialog components

pub mod button;
pub mod icons;
pub mod modal;
pub mod portal;

pub use button::ChromelessButton;
pub use icons::XIcon;
pub use modal::Modal;
pub use portal::{
    use_portal_target, use_root_portal, ModalRoot, PortalOutlet, PortalSlot, PortalTarget,
};
