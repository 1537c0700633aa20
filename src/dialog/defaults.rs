use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::Dialog;
use super::action::{ActionCallback, ButtonStyle, DialogAction};

/// Labels and button styles used by the action factories.
///
/// Passed to a [`super::Dialog`] at construction, usually from the `[dialog]`
/// section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogDefaults {
    pub ok_label: String,
    pub cancel_label: String,
    pub primary_style: ButtonStyle,
    pub default_button_style: ButtonStyle,
}

impl Default for DialogDefaults {
    fn default() -> Self {
        Self {
            ok_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            primary_style: ButtonStyle::Primary,
            default_button_style: ButtonStyle::Secondary,
        }
    }
}

/// Replacement values for [`DialogDefaults`]. `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsOverride {
    pub ok_label: Option<String>,
    pub cancel_label: Option<String>,
    pub primary_style: Option<ButtonStyle>,
    pub default_button_style: Option<ButtonStyle>,
}

impl DefaultsOverride {
    #[must_use]
    pub fn with_ok_label(mut self, label: impl Into<String>) -> Self {
        self.ok_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_primary_style(mut self, style: ButtonStyle) -> Self {
        self.primary_style = Some(style);
        self
    }

    #[must_use]
    pub const fn with_default_button_style(mut self, style: ButtonStyle) -> Self {
        self.default_button_style = Some(style);
        self
    }
}

impl DialogDefaults {
    /// Returns these defaults with every set field of `overrides` applied.
    #[must_use]
    pub fn merged(&self, overrides: &DefaultsOverride) -> Self {
        Self {
            ok_label: overrides
                .ok_label
                .clone()
                .unwrap_or_else(|| self.ok_label.clone()),
            cancel_label: overrides
                .cancel_label
                .clone()
                .unwrap_or_else(|| self.cancel_label.clone()),
            primary_style: overrides.primary_style.unwrap_or(self.primary_style),
            default_button_style: overrides
                .default_button_style
                .unwrap_or(self.default_button_style),
        }
    }

    /// Generic action.
    #[must_use]
    pub fn action(
        &self,
        label: Option<&str>,
        func: Option<ActionCallback>,
        style: Option<ButtonStyle>,
        key: Option<&str>,
    ) -> DialogAction {
        DialogAction::new(label, func, style, key)
    }

    /// Action bound to Enter, styled primary unless `style` is given.
    #[must_use]
    pub fn default_action(
        &self,
        label: Option<&str>,
        func: Option<ActionCallback>,
        style: Option<ButtonStyle>,
    ) -> DialogAction {
        DialogAction::new(
            label,
            func,
            Some(style.unwrap_or(self.primary_style)),
            Some("enter"),
        )
    }

    /// OK button bound to Enter. Hides the dialog, then runs `func`.
    #[must_use]
    pub fn ok_action(&self, func: Option<ActionCallback>) -> DialogAction {
        DialogAction::new(
            Some(&self.ok_label),
            Some(hide_then(func)),
            Some(self.primary_style),
            Some("enter"),
        )
    }

    /// Cancel button bound to Esc. Hides the dialog, then runs `func`.
    #[must_use]
    pub fn cancel_action(&self, func: Option<ActionCallback>) -> DialogAction {
        DialogAction::new(
            Some(&self.cancel_label),
            Some(hide_then(func)),
            None,
            Some("esc"),
        )
    }

    /// Lone OK button that Enter and Esc both trigger.
    #[must_use]
    pub fn single_ok_action(&self) -> DialogAction {
        DialogAction::new(
            Some(&self.ok_label),
            Some(hide_then(None)),
            Some(self.primary_style),
            Some("enter,esc"),
        )
    }
}

fn hide_then(func: Option<ActionCallback>) -> ActionCallback {
    Rc::new(move |dialog: &mut Dialog| {
        dialog.hide();
        if let Some(func) = &func {
            func(dialog);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_keeps_unset_fields() {
        let base = DialogDefaults::default();
        let merged = base.merged(&DefaultsOverride::default().with_ok_label("Yes"));
        assert_eq!(merged.ok_label, "Yes");
        assert_eq!(merged.cancel_label, "Cancel");
        assert_eq!(merged.primary_style, ButtonStyle::Primary);
    }

    #[test]
    fn test_factory_shapes() {
        let defaults = DialogDefaults::default();

        let ok = defaults.ok_action(None);
        assert_eq!(ok.label(), Some("OK"));
        assert_eq!(ok.key(), Some("enter"));
        assert_eq!(ok.style(), Some(ButtonStyle::Primary));

        let cancel = defaults.cancel_action(None);
        assert_eq!(cancel.label(), Some("Cancel"));
        assert_eq!(cancel.key(), Some("esc"));
        assert_eq!(cancel.style(), None);

        let single = defaults.single_ok_action();
        assert_eq!(single.key(), Some("enter,esc"));

        let custom = defaults.default_action(Some("Go"), None, None);
        assert_eq!(custom.style(), Some(ButtonStyle::Primary));
        assert_eq!(custom.key(), Some("enter"));

        let danger = defaults.default_action(Some("Drop"), None, Some(ButtonStyle::Danger));
        assert_eq!(danger.style(), Some(ButtonStyle::Danger));
    }

    #[test]
    fn test_deserialize_partial_section() {
        let defaults: DialogDefaults =
            toml::from_str("ok_label = \"Sure\"\nprimary_style = \"success\"").unwrap();
        assert_eq!(defaults.ok_label, "Sure");
        assert_eq!(defaults.cancel_label, "Cancel");
        assert_eq!(defaults.primary_style, ButtonStyle::Success);
    }
}
