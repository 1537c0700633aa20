use std::str::FromStr;

use crossterm::event::KeyEvent;
use tracing::warn;

use super::action::DialogAction;
use crate::key::Key;

/// Maps keys to the actions they trigger while a dialog is shown.
#[derive(Debug, Clone, Default)]
pub struct KeyBinds {
    bindings: Vec<(Key, DialogAction)>,
}

impl KeyBinds {
    /// Builds the map from each action's comma-separated key string.
    ///
    /// Unparseable parts are skipped. When two actions bind the same key,
    /// the later one wins.
    #[must_use]
    pub fn from_actions(actions: &[DialogAction]) -> Self {
        let mut binds = Self::default();
        for action in actions {
            let Some(keys) = action.key() else {
                continue;
            };
            for part in keys.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                match Key::from_str(part) {
                    Ok(key) => binds.insert(key, action.clone()),
                    Err(error) => warn!(key = part, %error, "Skipping invalid dialog key binding"),
                }
            }
        }
        binds
    }

    fn insert(&mut self, key: Key, action: DialogAction) {
        if let Some(slot) = self.bindings.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = action;
        } else {
            self.bindings.push((key, action));
        }
    }

    /// Action bound to the pressed key, if any.
    #[must_use]
    pub fn find(&self, event: &KeyEvent) -> Option<&DialogAction> {
        self.bindings
            .iter()
            .find(|(key, _)| key.matches(event))
            .map(|(_, action)| action)
    }

    /// Action bound to exactly this key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&DialogAction> {
        self.bindings
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, action)| action)
    }

    /// Keys bound to `action`, in binding order.
    pub fn keys_for<'a>(&'a self, action: &'a DialogAction) -> impl Iterator<Item = &'a Key> {
        self.bindings
            .iter()
            .filter(move |(_, a)| a == action)
            .map(|(key, _)| key)
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_comma_separated_keys_share_action() {
        let action = DialogAction::new(Some("OK"), None, None, Some("enter, esc"));
        let binds = KeyBinds::from_actions(std::slice::from_ref(&action));

        assert_eq!(binds.len(), 2);
        assert_eq!(binds.find(&press(KeyCode::Enter)), Some(&action));
        assert_eq!(binds.find(&press(KeyCode::Esc)), Some(&action));
        assert_eq!(binds.keys_for(&action).count(), 2);
    }

    #[test]
    fn test_later_action_wins() {
        let first = DialogAction::new(Some("A"), None, None, Some("enter"));
        let second = DialogAction::new(Some("B"), None, None, Some("enter"));
        let binds = KeyBinds::from_actions(&[first, second.clone()]);

        assert_eq!(binds.len(), 1);
        assert_eq!(binds.get(&Key::new(KeyCode::Enter)), Some(&second));
    }

    #[test]
    fn test_invalid_parts_are_skipped() {
        let action = DialogAction::new(None, None, None, Some("bogus,,y"));
        let binds = KeyBinds::from_actions(&[action]);

        assert_eq!(binds.len(), 1);
        assert!(binds.find(&press(KeyCode::Char('y'))).is_some());
    }

    #[test]
    fn test_actions_without_keys_are_unbound() {
        let binds = KeyBinds::from_actions(&[DialogAction::new(Some("x"), None, None, None)]);
        assert!(binds.is_empty());
    }
}
