//! Modal dialogs for ratatui applications.
//!
//! [`Dialog`] is a reusable overlay that replaces blocking confirm/alert
//! prompts: show it with a title, a body, a set of [`DialogAction`] buttons
//! and optionally a text or password [`Prompt`], route input to it while it
//! is shown, and draw it last.

pub mod dialog;
pub mod key;
pub mod theme;
pub mod ui;

pub use dialog::{
    ActionCallback, ButtonStyle, DefaultsOverride, Dialog, DialogAction, DialogBody,
    DialogDefaults, DialogEvent, DialogOptions, DialogSize, Prompt, PromptOptions, SizeUnits,
    callback,
};
pub use key::{Key, KeyBinding};
pub use theme::Theme;
