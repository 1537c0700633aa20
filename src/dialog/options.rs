use ratatui::text::{Line, Text};

use super::action::{ActionCallback, DialogAction};
use super::prompt::Prompt;
use super::size::DialogSize;

/// Dialog body content.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogBody {
    /// Drawn as wrapped plain text.
    Text(String),
    /// Pre-styled content drawn as given.
    Rich(Text<'static>),
}

impl From<&str> for DialogBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DialogBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Text<'static>> for DialogBody {
    fn from(text: Text<'static>) -> Self {
        Self::Rich(text)
    }
}

impl From<Line<'static>> for DialogBody {
    fn from(line: Line<'static>) -> Self {
        Self::Rich(Text::from(line))
    }
}

/// Everything a single [`super::Dialog::show`] call displays.
///
/// Unset fields are left empty; nothing carries over from a previous call.
#[derive(Default)]
pub struct DialogOptions {
    pub title: Option<String>,
    pub body: Option<DialogBody>,
    pub actions: Vec<DialogAction>,
    pub size: Option<DialogSize>,
    /// Called instead of hiding when the dialog is dismissed.
    pub on_hide: Option<ActionCallback>,
    pub prompt: Option<Prompt>,
}

impl DialogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<DialogBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = DialogAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: DialogAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: Option<DialogSize>) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_on_hide(mut self, on_hide: ActionCallback) -> Self {
        self.on_hide = Some(on_hide);
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = Some(prompt);
        self
    }
}
