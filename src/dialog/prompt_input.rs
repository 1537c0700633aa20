use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::prompt::{Prompt, PromptKind};
use crate::Theme;
use crate::ui::{Component, Handled, Result};

/// Rows a mounted prompt takes inside the dialog body.
pub const PROMPT_HEIGHT: u16 = 3;

pub enum PromptEvent {
    /// Enter was pressed inside the field.
    Submitted(String),
}

/// Single-line text or password field rendered from a [`Prompt`].
///
/// The cursor counts characters, not bytes.
pub struct PromptInput {
    kind: PromptKind,
    label: Option<String>,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
}

impl PromptInput {
    #[must_use]
    pub fn new(prompt: &Prompt) -> Self {
        let options = prompt.options();
        let value = options.initial_value.clone().unwrap_or_default();
        Self {
            kind: prompt.kind(),
            label: options.label.clone(),
            cursor: value.chars().count(),
            value,
            placeholder: options.placeholder.clone(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn is_masked(&self) -> bool {
        matches!(self.kind, PromptKind::Password)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    fn delete_char_before_cursor(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    fn delete_char_at_cursor(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    fn delete_word_before_cursor(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1] == ' ' {
            pos -= 1;
        }
        while pos > 0 && chars[pos - 1] != ' ' {
            pos -= 1;
        }
        let (start, end) = (self.byte_index(pos), self.byte_index(self.cursor));
        self.value.drain(start..end);
        self.cursor = pos;
    }

    fn clear_line(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn display_value(&self) -> String {
        if self.is_masked() {
            "*".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }
}

impl Component for PromptInput {
    type Output = PromptEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => PromptEvent::Submitted(self.value.clone()).into(),

            (KeyCode::Backspace, KeyModifiers::ALT) => {
                self.delete_word_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Backspace, _) => {
                self.delete_char_before_cursor();
                Handled::Consumed
            }
            (KeyCode::Delete, _) => {
                self.delete_char_at_cursor();
                Handled::Consumed
            }

            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Consumed
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                Handled::Consumed
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Handled::Consumed
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.char_count();
                Handled::Consumed
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.clear_line();
                Handled::Consumed
            }

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let mut buf = [0; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Handled::Consumed
            }

            // Esc, Tab and unclaimed shortcuts belong to the dialog.
            _ => Handled::Ignored,
        })
    }

    fn handle_paste(&mut self, text: &str) -> Result<Handled<Self::Output>> {
        let line: String = text.chars().filter(|c| !c.is_control()).collect();
        self.insert_str(&line);
        Ok(Handled::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let input_style = Style::default().fg(theme.text());
        let cursor_style = Style::default()
            .fg(theme.base())
            .bg(theme.text())
            .add_modifier(Modifier::BOLD);
        let placeholder_style = Style::default().fg(theme.overlay0());

        let line = match &self.placeholder {
            Some(placeholder) if self.value.is_empty() => Line::from(vec![
                Span::styled(" ", cursor_style),
                Span::styled(placeholder.clone(), placeholder_style),
            ]),
            _ => {
                let display: Vec<char> = self.display_value().chars().collect();
                let before: String = display[..self.cursor].iter().collect();
                let cursor_char = display.get(self.cursor).copied().unwrap_or(' ');
                let after: String = display.iter().skip(self.cursor + 1).collect();
                Line::from(vec![
                    Span::styled(before, input_style),
                    Span::styled(cursor_char.to_string(), cursor_style),
                    Span::styled(after, input_style),
                ])
            }
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender()));
        if let Some(label) = &self.label {
            block = block
                .title(format!(" {label} "))
                .title_style(Style::default().fg(theme.subtext0()));
        }

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::PromptOptions;

    fn type_str(input: &mut PromptInput, text: &str) {
        for c in text.chars() {
            input
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
        }
    }

    fn key(input: &mut PromptInput, code: KeyCode, modifiers: KeyModifiers) -> Handled<PromptEvent> {
        input.handle_key(KeyEvent::new(code, modifiers)).unwrap()
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = PromptInput::new(&Prompt::text(PromptOptions::new()));
        type_str(&mut input, "hello world");
        assert_eq!(input.value(), "hello world");

        key(&mut input, KeyCode::Backspace, KeyModifiers::ALT);
        assert_eq!(input.value(), "hello ");

        key(&mut input, KeyCode::Home, KeyModifiers::NONE);
        key(&mut input, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "ello ");

        key(&mut input, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = PromptInput::new(&Prompt::text(
            PromptOptions::new().with_initial_value("héllo"),
        ));
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        key(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "hllo");
        type_str(&mut input, "ë");
        assert_eq!(input.value(), "hëllo");
    }

    #[test]
    fn test_enter_submits_and_esc_is_ignored() {
        let mut input = PromptInput::new(&Prompt::password(
            PromptOptions::new().with_initial_value("secret"),
        ));
        assert!(input.is_masked());
        assert!(matches!(
            key(&mut input, KeyCode::Enter, KeyModifiers::NONE),
            Handled::Event(PromptEvent::Submitted(ref v)) if v == "secret"
        ));
        assert!(!key(&mut input, KeyCode::Esc, KeyModifiers::NONE).is_consumed());
        assert!(!key(&mut input, KeyCode::Tab, KeyModifiers::NONE).is_consumed());
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = PromptInput::new(&Prompt::text(PromptOptions::new()));
        input.handle_paste("abc\ndef").unwrap();
        assert_eq!(input.value(), "abcdef");
    }
}
