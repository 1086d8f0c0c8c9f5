mod close_button_alignment;
mod modal_role;
mod modal_size;

pub use close_button_alignment::CloseButtonAlignment;
pub use modal_role::ModalRole;
pub use modal_size::ModalSize;
