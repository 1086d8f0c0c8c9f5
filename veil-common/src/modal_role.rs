/// ARIA role carried by the dialog panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalRole {
    /// Ordinary dialog
    Dialog,
    /// Dialog that interrupts the user with an urgent message
    AlertDialog,
}

impl ModalRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalRole::Dialog => "dialog",
            ModalRole::AlertDialog => "alertdialog",
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for ModalRole {
    fn default() -> Self {
        ModalRole::Dialog
    }
}
