mod mock_modal;

pub use mock_modal::MockModal;
