pub mod actions;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::*;
use keybindings::KeybindingsConfig;
use lazydialog::{DialogDefaults, SizeUnits};
pub use loader::load;
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

/// The `[dialog]` section: default labels and styles plus how overlays are sized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(flatten)]
    pub defaults: DialogDefaults,
    #[serde(default)]
    pub size_units: SizeUnits,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[cfg(test)]
mod tests {
    use lazydialog::ButtonStyle;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.theme.name, "Catppuccin Mocha");
        assert_eq!(config.dialog.defaults, DialogDefaults::default());
        assert_eq!(config.dialog.size_units, SizeUnits::Percent);
    }

    #[test]
    fn test_dialog_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [dialog]
            ok_label = "Yes"
            primary_style = "success"
            size_units = "columns"

            [keybindings.demo]
            quit = ["q", "ctrl+q"]
            "#,
        )
        .unwrap();
        assert_eq!(config.dialog.defaults.ok_label, "Yes");
        assert_eq!(config.dialog.defaults.cancel_label, "Cancel");
        assert_eq!(config.dialog.defaults.primary_style, ButtonStyle::Success);
        assert_eq!(config.dialog.size_units, SizeUnits::Columns);
        assert_eq!(config.keybindings.demo.quit.display(), "q/ctrl+q");
        assert_eq!(config.keybindings.demo.alert.display(), "a");
    }
}
