use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::DemoAction;
use crate::config::keybindings::{DemoKeybindings, KeybindingsConfig};
use lazydialog::KeyBinding;

pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    fn demo_binding(&self, action: DemoAction) -> &KeyBinding {
        let kb: &DemoKeybindings = &self.keybindings.demo;
        match action {
            DemoAction::Alert => &kb.alert,
            DemoAction::Confirm => &kb.confirm,
            DemoAction::Prompt => &kb.prompt,
            DemoAction::Password => &kb.password,
            DemoAction::Danger => &kb.danger,
            DemoAction::Quit => &kb.quit,
        }
    }

    pub fn matches_demo(&self, event: &KeyEvent, action: DemoAction) -> bool {
        self.demo_binding(action).matches(event)
    }

    /// First demo action bound to the pressed key.
    pub fn resolve_demo(&self, event: &KeyEvent) -> Option<DemoAction> {
        DemoAction::ALL
            .into_iter()
            .find(|action| self.matches_demo(event, *action))
    }

    pub fn display_demo(&self, action: DemoAction) -> String {
        self.demo_binding(action).display()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn test_resolve_default_bindings() {
        let resolver = KeyResolver::new(Arc::new(KeybindingsConfig::default()));
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            resolver.resolve_demo(&press(KeyCode::Char('a'))),
            Some(DemoAction::Alert)
        );
        assert_eq!(
            resolver.resolve_demo(&press(KeyCode::Esc)),
            Some(DemoAction::Quit)
        );
        assert_eq!(resolver.resolve_demo(&press(KeyCode::Char('z'))), None);
        assert_eq!(resolver.display_demo(DemoAction::Quit), "q/Esc");
    }
}
