/// Width preset for the dialog panel. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    pub const ALL: [ModalSize; 5] = [
        ModalSize::Xs,
        ModalSize::Sm,
        ModalSize::Md,
        ModalSize::Lg,
        ModalSize::Xl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalSize::Xs => "xs",
            ModalSize::Sm => "sm",
            ModalSize::Md => "md",
            ModalSize::Lg => "lg",
            ModalSize::Xl => "xl",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

#[allow(clippy::derivable_impls)]
impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Xs
    }
}
