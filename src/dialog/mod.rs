//! Modal dialog component.
//!
//! A [`Dialog`] is created once by the host and reused: [`Dialog::show`]
//! replaces its content and makes it visible, [`Dialog::hide`] takes it down.
//! While shown, the host routes every key, mouse and paste event to it and
//! draws it on top of the screen.
//!
//! ```ignore
//! let mut dialog = Dialog::default();
//! let ok = dialog.ok_action(Some(callback(|d| save(d.value()))));
//! let cancel = dialog.cancel_action(None);
//! dialog.show(
//!     DialogOptions::new()
//!         .with_title("Rename")
//!         .with_prompt(Prompt::text(PromptOptions::new().with_initial_value("draft")))
//!         .with_actions([cancel, ok]),
//! );
//! ```

mod action;
mod defaults;
mod keybinds;
mod options;
mod prompt;
mod prompt_input;
mod size;

pub use action::{ActionCallback, ButtonStyle, DialogAction, callback};
pub use defaults::{DefaultsOverride, DialogDefaults};
pub use keybinds::KeyBinds;
pub use options::{DialogBody, DialogOptions};
pub use prompt::{Prompt, PromptKind, PromptOptions};
pub use prompt_input::{PromptEvent, PromptInput};
pub use size::{DialogSize, SizeUnits, resolve as resolve_size};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::debug;

use crate::Theme;
use crate::key::Key;
use crate::ui::{Component, Handled, Result};
use prompt_input::PROMPT_HEIGHT;

/// Narrowest a button is drawn, in cells.
const MIN_BUTTON_WIDTH: u16 = 10;
const BUTTON_GAP: u16 = 1;

/// Emitted when an interaction leaves the dialog hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Closed,
}

#[derive(Default)]
struct DialogState {
    title: Option<String>,
    body: Option<DialogBody>,
    shown: bool,
    actions: Vec<DialogAction>,
    size: Option<DialogSize>,
    on_hide: Option<ActionCallback>,
    prompt: Option<Prompt>,
}

impl From<DialogOptions> for DialogState {
    fn from(options: DialogOptions) -> Self {
        Self {
            title: options.title,
            body: options.body,
            shown: false,
            actions: options.actions,
            size: options.size,
            on_hide: options.on_hide,
            prompt: options.prompt,
        }
    }
}

/// Areas from the last render, used to hit-test mouse clicks.
#[derive(Debug, Default)]
struct RenderedLayout {
    dialog: Option<Rect>,
    buttons: Vec<Rect>,
}

/// Modal dialog with a title, a body, action buttons and an optional prompt.
pub struct Dialog {
    state: DialogState,
    keybinds: KeyBinds,
    prompt_input: Option<PromptInput>,
    baseline: DialogDefaults,
    defaults: DialogDefaults,
    size_units: SizeUnits,
    focused: usize,
    layout: RenderedLayout,
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new(DialogDefaults::default())
    }
}

impl Dialog {
    /// Creates a hidden dialog. `defaults` is also the baseline
    /// [`Dialog::reset_options`] returns to.
    #[must_use]
    pub fn new(defaults: DialogDefaults) -> Self {
        Self {
            state: DialogState::default(),
            keybinds: KeyBinds::default(),
            prompt_input: None,
            baseline: defaults.clone(),
            defaults,
            size_units: SizeUnits::default(),
            focused: 0,
            layout: RenderedLayout::default(),
        }
    }

    #[must_use]
    pub fn with_size_units(mut self, units: SizeUnits) -> Self {
        self.size_units = units;
        self
    }

    /// Shows the dialog with `options`, replacing everything from the
    /// previous call.
    pub fn show(&mut self, options: DialogOptions) {
        self.keybinds = KeyBinds::from_actions(&options.actions);
        self.prompt_input = options.prompt.as_ref().map(PromptInput::new);
        self.state = DialogState {
            shown: true,
            ..DialogState::from(options)
        };
        self.focused = 0;
        self.layout = RenderedLayout::default();
        debug!(
            title = self.state.title.as_deref().unwrap_or_default(),
            actions = self.state.actions.len(),
            keybinds = self.keybinds.len(),
            prompt = self.state.prompt.is_some(),
            "Showing dialog"
        );
    }

    /// Shows `body` with a single OK button that Enter and Esc both trigger.
    pub fn show_alert(&mut self, body: impl Into<DialogBody>, size: Option<DialogSize>) {
        let ok = self.defaults.single_ok_action();
        self.show(
            DialogOptions::new()
                .with_body(body)
                .with_action(ok)
                .with_size(size),
        );
    }

    /// Hides the dialog. Does nothing if it is already hidden.
    ///
    /// The prompt stays readable through [`Dialog::value`] until the next
    /// `show`, so callbacks that hide first can still read it.
    pub fn hide(&mut self) {
        if !self.state.shown {
            return;
        }
        self.state.shown = false;
        self.keybinds.clear();
        self.layout = RenderedLayout::default();
        debug!("Hiding dialog");
    }

    /// Runs the `on_hide` callback if one was given, otherwise hides.
    pub fn dismiss(&mut self) {
        debug!("Dialog dismissed");
        match self.state.on_hide.clone() {
            Some(on_hide) => on_hide(self),
            None => self.hide(),
        }
    }

    /// Tears the dialog down for good, hiding it first if shown.
    pub fn unmount(&mut self) {
        if self.state.shown {
            self.hide();
        }
        self.prompt_input = None;
    }

    /// Current text of the mounted prompt, or `None` without a prompt.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.prompt_input.as_ref().map(PromptInput::value)
    }

    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.state.shown
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.state.title.as_deref()
    }

    #[must_use]
    pub const fn body(&self) -> Option<&DialogBody> {
        self.state.body.as_ref()
    }

    #[must_use]
    pub fn actions(&self) -> &[DialogAction] {
        &self.state.actions
    }

    #[must_use]
    pub const fn prompt(&self) -> Option<&Prompt> {
        self.state.prompt.as_ref()
    }

    #[must_use]
    pub const fn keybinds(&self) -> &KeyBinds {
        &self.keybinds
    }

    /// Size the dialog is drawn with; see [`resolve_size`].
    #[must_use]
    pub const fn resolved_size(&self) -> Option<DialogSize> {
        resolve_size(self.state.size)
    }

    /// Index of the button that Space activates.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    #[must_use]
    pub const fn defaults(&self) -> &DialogDefaults {
        &self.defaults
    }

    /// Applies `overrides` over the construction baseline. Affects actions
    /// built afterwards.
    pub fn set_options(&mut self, overrides: &DefaultsOverride) {
        self.defaults = self.baseline.merged(overrides);
    }

    /// Restores the defaults given at construction.
    pub fn reset_options(&mut self) {
        self.defaults = self.baseline.clone();
    }

    #[must_use]
    pub fn action(
        &self,
        label: Option<&str>,
        func: Option<ActionCallback>,
        style: Option<ButtonStyle>,
        key: Option<&str>,
    ) -> DialogAction {
        self.defaults.action(label, func, style, key)
    }

    #[must_use]
    pub fn default_action(
        &self,
        label: Option<&str>,
        func: Option<ActionCallback>,
        style: Option<ButtonStyle>,
    ) -> DialogAction {
        self.defaults.default_action(label, func, style)
    }

    #[must_use]
    pub fn ok_action(&self, func: Option<ActionCallback>) -> DialogAction {
        self.defaults.ok_action(func)
    }

    #[must_use]
    pub fn cancel_action(&self, func: Option<ActionCallback>) -> DialogAction {
        self.defaults.cancel_action(func)
    }

    #[must_use]
    pub fn single_ok_action(&self) -> DialogAction {
        self.defaults.single_ok_action()
    }

    /// Runs the action at `index`, if there is one.
    pub fn trigger(&mut self, index: usize) {
        if let Some(action) = self.state.actions.get(index).cloned() {
            debug!(label = action.label().unwrap_or_default(), "Dialog action triggered");
            action.invoke(self);
        }
    }

    fn submit_prompt(&mut self) {
        if let Some(action) = self.keybinds.get(&Key::new(KeyCode::Enter)).cloned() {
            action.invoke(self);
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(input) = self.prompt_input.as_mut() {
            match input.handle_key(key)? {
                Handled::Event(PromptEvent::Submitted(_)) => {
                    self.submit_prompt();
                    return Ok(());
                }
                Handled::Consumed => return Ok(()),
                Handled::Ignored => {}
            }
        }

        if let Some(action) = self.keybinds.find(&key).cloned() {
            action.invoke(self);
            return Ok(());
        }

        let count = self.state.actions.len();
        match key.code {
            KeyCode::Tab | KeyCode::Right if count > 0 => {
                self.focused = (self.focused + 1) % count;
            }
            KeyCode::BackTab | KeyCode::Left if count > 0 => {
                self.focused = (self.focused + count - 1) % count;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.trigger(self.focused),
            KeyCode::Esc => self.dismiss(),
            _ => {}
        }
        Ok(())
    }

    fn outcome(&self) -> Handled<DialogEvent> {
        if self.state.shown {
            Handled::Consumed
        } else {
            DialogEvent::Closed.into()
        }
    }

    fn body_text(&self) -> Option<Text<'static>> {
        self.state.body.as_ref().map(|body| match body {
            DialogBody::Text(text) => Text::from(text.clone()),
            DialogBody::Rich(text) => text.clone(),
        })
    }

    fn button_label(action: &DialogAction) -> String {
        format!(" {} ", action.label().unwrap_or_default())
    }

    fn button_width(action: &DialogAction) -> u16 {
        let width = Line::from(Self::button_label(action)).width();
        u16::try_from(width).unwrap_or(u16::MAX).max(MIN_BUTTON_WIDTH)
    }

    /// Lays buttons out right-aligned in `footer`, clipped to it.
    fn layout_buttons(&self, footer: Rect) -> Vec<Rect> {
        let widths: Vec<u16> = self.state.actions.iter().map(Self::button_width).collect();
        let gap_count = u16::try_from(widths.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let gaps = BUTTON_GAP.saturating_mul(gap_count);
        let total = widths.iter().fold(gaps, |acc, w| acc.saturating_add(*w));

        let mut x = footer.x + footer.width.saturating_sub(total);
        widths
            .into_iter()
            .map(|width| {
                let rect = Rect::new(x, footer.y, width, 1).intersection(footer);
                x = x.saturating_add(width).saturating_add(BUTTON_GAP);
                rect
            })
            .collect()
    }
}

impl Component for Dialog {
    type Output = DialogEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        if !self.state.shown {
            return Ok(Handled::Ignored);
        }
        self.dispatch_key(key)?;
        Ok(self.outcome())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        if !self.state.shown {
            return Ok(Handled::Ignored);
        }
        let Some(dialog_area) = self.layout.dialog else {
            return Ok(Handled::Consumed);
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(Handled::Consumed);
        }

        let position = Position::new(mouse.column, mouse.row);
        if let Some(index) = self
            .layout
            .buttons
            .iter()
            .position(|rect| rect.contains(position))
        {
            self.focused = index;
            self.trigger(index);
        } else if !dialog_area.contains(position) {
            self.dismiss();
        }
        Ok(self.outcome())
    }

    fn handle_paste(&mut self, text: &str) -> Result<Handled<Self::Output>> {
        if !self.state.shown {
            return Ok(Handled::Ignored);
        }
        if let Some(input) = self.prompt_input.as_mut() {
            input.handle_paste(text)?;
        }
        Ok(Handled::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.state.shown {
            return;
        }

        let width = self.size_units.width(self.resolved_size());
        let [column] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let inner_width = column.width.saturating_sub(2);

        let body = self.body_text().map(|text| {
            Paragraph::new(text)
                .style(Style::default().fg(theme.text()))
                .wrap(Wrap { trim: false })
        });
        // Word wrapping can need more rows than the raw width suggests.
        let body_height = body.as_ref().map_or(0, |paragraph| {
            u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX)
        });
        let prompt_height = if self.prompt_input.is_some() { PROMPT_HEIGHT } else { 0 };
        let gap = u16::from(body_height > 0 || prompt_height > 0);
        let height = body_height
            .saturating_add(prompt_height + gap + 1 + 2)
            .min(area.height);

        let dialog_area = area.centered(width, Constraint::Length(height));
        frame.render_widget(Clear, dialog_area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.lavender()))
            .style(Style::default().bg(theme.base()));
        if let Some(title) = &self.state.title {
            block = block.title(format!(" {title} ")).title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            );
        }
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let [body_area, prompt_area, _, footer_area] = Layout::vertical([
            Constraint::Length(body_height),
            Constraint::Length(prompt_height),
            Constraint::Length(gap),
            Constraint::Length(1),
        ])
        .areas(inner);

        if let Some(paragraph) = body {
            frame.render_widget(paragraph, body_area);
        }

        if let Some(input) = self.prompt_input.as_mut() {
            input.render(frame, prompt_area, theme);
        }

        let buttons = self.layout_buttons(footer_area);
        for (index, (action, rect)) in self.state.actions.iter().zip(&buttons).enumerate() {
            let color = theme.button(action.style().unwrap_or(self.defaults.default_button_style));
            let style = if index == self.focused {
                Style::default().fg(theme.base()).bg(color)
            } else {
                Style::default().fg(color).bg(theme.surface0())
            }
            .add_modifier(Modifier::BOLD);
            let label = Line::from(Span::styled(Self::button_label(action), style)).centered();
            frame.render_widget(Paragraph::new(label).style(style), *rect);
        }

        let hints: Vec<Span> = self
            .state
            .actions
            .iter()
            .filter_map(|action| {
                let keys: Vec<String> = self.keybinds.keys_for(action).map(Key::display).collect();
                (!keys.is_empty()).then(|| {
                    format!(" {} {} ", keys.join("/"), action.label().unwrap_or_default())
                })
            })
            .map(|hint| Span::styled(hint, Style::default().fg(theme.overlay1())))
            .collect();
        if !hints.is_empty() && dialog_area.height > 1 {
            let hint_area = Rect::new(
                dialog_area.x + 1,
                dialog_area.bottom() - 1,
                dialog_area.width.saturating_sub(2),
                1,
            );
            frame.render_widget(Paragraph::new(Line::from(hints)).right_aligned(), hint_area);
        }

        self.layout = RenderedLayout {
            dialog: Some(dialog_area),
            buttons,
        };
    }
}

impl Drop for Dialog {
    fn drop(&mut self) {
        self.unmount();
    }
}
