//! Shared controls for veil-mocks

mod checkbox;
mod select;
mod toggle_button;

pub use checkbox::Checkbox;
pub use select::Select;
pub use toggle_button::ToggleButton;
