use crossterm::event::KeyCode;
use lazydialog::{Key, KeyBinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoKeybindings {
    pub alert: KeyBinding,
    pub confirm: KeyBinding,
    pub prompt: KeyBinding,
    pub password: KeyBinding,
    pub danger: KeyBinding,
    pub quit: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub demo: DemoKeybindings,
}

impl Default for DemoKeybindings {
    fn default() -> Self {
        Self {
            alert: Key::new(KeyCode::Char('a')).into(),
            confirm: Key::new(KeyCode::Char('c')).into(),
            prompt: Key::new(KeyCode::Char('p')).into(),
            password: Key::new(KeyCode::Char('w')).into(),
            danger: Key::new(KeyCode::Char('d')).into(),
            quit: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('q')),
                Key::new(KeyCode::Esc),
            ]),
        }
    }
}
