/// Horizontal placement of the secondary "Close" text button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseButtonAlignment {
    Left,
    Center,
    Right,
}

impl CloseButtonAlignment {
    pub const ALL: [CloseButtonAlignment; 3] = [
        CloseButtonAlignment::Left,
        CloseButtonAlignment::Center,
        CloseButtonAlignment::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CloseButtonAlignment::Left => "left",
            CloseButtonAlignment::Center => "center",
            CloseButtonAlignment::Right => "right",
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for CloseButtonAlignment {
    fn default() -> Self {
        CloseButtonAlignment::Right
    }
}
