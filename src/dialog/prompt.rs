/// Which input field a prompt renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    /// Input is masked while typing.
    Password,
}

/// Options shared by every prompt kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    pub initial_value: Option<String>,
    pub placeholder: Option<String>,
    pub label: Option<String>,
}

impl PromptOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Describes the input field embedded in a dialog body.
///
/// This is configuration only; the text typed by the user lives in the
/// mounted [`super::PromptInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    options: PromptOptions,
}

impl Prompt {
    #[must_use]
    pub const fn text(options: PromptOptions) -> Self {
        Self {
            kind: PromptKind::Text,
            options,
        }
    }

    #[must_use]
    pub const fn password(options: PromptOptions) -> Self {
        Self {
            kind: PromptKind::Password,
            options,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PromptKind {
        self.kind
    }

    #[must_use]
    pub const fn options(&self) -> &PromptOptions {
        &self.options
    }
}
