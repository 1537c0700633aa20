use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::Dialog;

/// Callback run when an action is triggered or the dialog is dismissed.
pub type ActionCallback = Rc<dyn Fn(&mut Dialog)>;

/// Wraps a closure as an [`ActionCallback`].
pub fn callback<F>(f: F) -> ActionCallback
where
    F: Fn(&mut Dialog) + 'static,
{
    Rc::new(f)
}

/// Visual style of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    #[default]
    Secondary,
    Success,
    /// Destructive actions.
    Danger,
    Warning,
    Info,
}

struct ActionInner {
    label: Option<String>,
    func: Option<ActionCallback>,
    style: Option<ButtonStyle>,
    key: Option<String>,
}

/// A labeled, styled, optionally key-bound callback shown as a dialog button.
///
/// Actions are immutable. Clones share the same underlying action, and
/// equality compares identity rather than contents.
#[derive(Clone)]
pub struct DialogAction(Rc<ActionInner>);

impl DialogAction {
    /// Creates an action.
    ///
    /// `key` is a comma-separated list of keys such as `"enter"`, `"esc"` or
    /// `"enter,esc"`; see [`crate::Key`] for the accepted names.
    #[must_use]
    pub fn new(
        label: Option<&str>,
        func: Option<ActionCallback>,
        style: Option<ButtonStyle>,
        key: Option<&str>,
    ) -> Self {
        Self(Rc::new(ActionInner {
            label: label.map(str::to_owned),
            func,
            style,
            key: key.map(str::to_owned),
        }))
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.0.label.as_deref()
    }

    #[must_use]
    pub fn style(&self) -> Option<ButtonStyle> {
        self.0.style
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.0.key.as_deref()
    }

    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.0.func.is_some()
    }

    /// Runs the callback with the dialog, if the action has one.
    pub fn invoke(&self, dialog: &mut Dialog) {
        if let Some(func) = &self.0.func {
            func(dialog);
        }
    }
}

impl PartialEq for DialogAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DialogAction {}

impl fmt::Debug for DialogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogAction")
            .field("label", &self.0.label)
            .field("style", &self.0.style)
            .field("key", &self.0.key)
            .field("has_callback", &self.0.func.is_some())
            .finish()
    }
}
