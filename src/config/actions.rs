#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    Alert,
    Confirm,
    Prompt,
    Password,
    Danger,
    Quit,
}

impl DemoAction {
    pub const ALL: [Self; 6] = [
        Self::Alert,
        Self::Confirm,
        Self::Prompt,
        Self::Password,
        Self::Danger,
        Self::Quit,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            Self::Alert => "Show an alert",
            Self::Confirm => "Ask for confirmation",
            Self::Prompt => "Ask for a name",
            Self::Password => "Ask for a password",
            Self::Danger => "Confirm a destructive action",
            Self::Quit => "Quit",
        }
    }
}
