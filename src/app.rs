use std::sync::Arc;

use crossterm::event::KeyEvent;
use lazydialog::ui::{Component, Handled};
use lazydialog::{
    ButtonStyle, Dialog, DialogEvent, DialogOptions, DialogSize, Prompt, PromptOptions, Theme,
    callback,
};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::command::Command;
use crate::config::{DemoAction, KeyResolver};
use crate::tui::{Event, Tui};

pub struct App {
    dialog: Dialog,
    theme: Theme,
    resolver: Arc<KeyResolver>,
    status: String,
    should_quit: bool,
    should_suspend: bool,
    command_tx: UnboundedSender<Command>,
    command_rx: UnboundedReceiver<Command>,
}

impl App {
    pub fn new(dialog: Dialog, resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            dialog,
            theme,
            resolver,
            status: "Pick a dialog to open".to_string(),
            should_quit: false,
            should_suspend: false,
            command_tx,
            command_rx,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(60.0, 4.0)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.handle_commands(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                self.command_tx.send(Command::Resume)?;
                self.command_tx.send(Command::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                break;
            }
        }

        self.dialog.unmount();
        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };

        match event {
            Event::Quit => self.command_tx.send(Command::Quit)?,
            Event::Suspend => self.command_tx.send(Command::Suspend)?,
            Event::Tick => self.command_tx.send(Command::Tick)?,
            Event::Render => self.command_tx.send(Command::Render)?,
            Event::Resize(width, height) => self.command_tx.send(Command::Resize(width, height))?,
            Event::Key(key) => self.handle_key(key)?,
            Event::Mouse(mouse) => {
                let handled = self.dialog.handle_mouse(mouse)?;
                self.after_dialog(&handled);
            }
            Event::Paste(text) => {
                self.dialog.handle_paste(&text)?;
            }
            Event::Error(error) => warn!(%error, "Terminal event error"),
            Event::Init => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        // An open dialog takes every key.
        let handled = self.dialog.handle_key(key)?;
        if handled.is_consumed() {
            self.after_dialog(&handled);
            return Ok(());
        }

        match self.resolver.resolve_demo(&key) {
            Some(DemoAction::Quit) => self.command_tx.send(Command::Quit)?,
            Some(action) => self.open(action),
            None => {}
        }
        Ok(())
    }

    fn after_dialog(&self, handled: &Handled<DialogEvent>) {
        if matches!(handled, Handled::Event(DialogEvent::Closed)) {
            debug!("Dialog closed");
        }
    }

    fn notifier(&self) -> impl Fn(String) + Clone + 'static {
        let tx = self.command_tx.clone();
        move |message| {
            if tx.send(Command::Notify(message)).is_err() {
                warn!("Command channel closed");
            }
        }
    }

    fn open(&mut self, action: DemoAction) {
        let notify = self.notifier();
        match action {
            DemoAction::Alert => {
                self.dialog.show_alert(
                    "Changes were saved. Enter or Esc closes this message.",
                    None,
                );
            }
            DemoAction::Confirm => {
                let on_ok = notify.clone();
                let on_cancel = notify;
                let ok = self
                    .dialog
                    .ok_action(Some(callback(move |_| on_ok("Confirmed".to_string()))));
                let cancel = self
                    .dialog
                    .cancel_action(Some(callback(move |_| on_cancel("Cancelled".to_string()))));
                self.dialog.show(
                    DialogOptions::new()
                        .with_title("Save changes")
                        .with_body("Write the buffer to disk before closing?")
                        .with_actions([cancel, ok]),
                );
            }
            DemoAction::Prompt => {
                let ok = self.dialog.ok_action(Some(callback(move |dialog| {
                    let name = dialog.value().unwrap_or_default();
                    notify(format!("Hello, {name}"));
                })));
                let cancel = self.dialog.cancel_action(None);
                self.dialog.show(
                    DialogOptions::new()
                        .with_title("Who are you?")
                        .with_body("Enter a name to greet.")
                        .with_prompt(Prompt::text(
                            PromptOptions::new()
                                .with_label("Name")
                                .with_placeholder("Ferris"),
                        ))
                        .with_actions([cancel, ok])
                        .with_size(Some(DialogSize::Medium)),
                );
            }
            DemoAction::Password => {
                let ok = self.dialog.ok_action(Some(callback(move |dialog| {
                    let length = dialog.value().map_or(0, |v| v.chars().count());
                    notify(format!("Got a password of {length} characters"));
                })));
                let cancel = self.dialog.cancel_action(None);
                self.dialog.show(
                    DialogOptions::new()
                        .with_title("Unlock")
                        .with_prompt(Prompt::password(
                            PromptOptions::new().with_label("Password"),
                        ))
                        .with_actions([cancel, ok]),
                );
            }
            DemoAction::Danger => {
                let on_delete = notify.clone();
                let on_dismiss = notify;
                let delete = self.dialog.action(
                    Some("Delete"),
                    Some(callback(move |dialog| {
                        dialog.hide();
                        on_delete("Deleted 3 files".to_string());
                    })),
                    Some(ButtonStyle::Danger),
                    Some("d,ctrl+d"),
                );
                let keep = self.dialog.cancel_action(None);
                let body = Text::from(vec![
                    Line::from("These files will be removed:"),
                    Line::from(Span::styled(
                        "  notes.txt, todo.md, draft.org",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from("This cannot be undone."),
                ]);
                self.dialog.show(
                    DialogOptions::new()
                        .with_title("Delete files")
                        .with_body(body)
                        .with_actions([keep, delete])
                        .with_size(Some(DialogSize::Large))
                        .with_on_hide(callback(move |dialog| {
                            dialog.hide();
                            on_dismiss("Dismissed".to_string());
                        })),
                );
            }
            DemoAction::Quit => {}
        }
    }

    fn handle_commands(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        while let Ok(command) = self.command_rx.try_recv() {
            if command != Command::Tick && command != Command::Render {
                debug!(?command, "Handling command");
            }

            match command {
                Command::Tick => self.dialog.on_tick(),
                Command::Quit => self.should_quit = true,
                Command::Suspend => self.should_suspend = true,
                Command::Resume => self.should_suspend = false,
                Command::ClearScreen => tui.clear()?,
                Command::Resize(width, height) => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                    self.render(tui)?;
                }
                Command::Render => self.render(tui)?,
                Command::Notify(message) => self.status = message,
            }
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Self {
            dialog,
            theme,
            resolver,
            status,
            ..
        } = self;
        tui.draw(|frame| {
            let area = frame.area();
            render_screen(frame, area, theme, resolver, status);
            dialog.render(frame, area, theme);
        })?;
        Ok(())
    }
}

/// Draws the demo screen underneath the dialog.
fn render_screen(frame: &mut Frame, area: Rect, theme: &Theme, resolver: &KeyResolver, status: &str) {
    let [main, status_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

    let key_style = Style::default()
        .fg(theme.peach())
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.text());
    let lines: Vec<Line> = DemoAction::ALL
        .iter()
        .map(|action| {
            Line::from(vec![
                Span::styled(format!("{:>8}", resolver.display_demo(*action)), key_style),
                Span::raw("  "),
                Span::styled(action.description(), text_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" lazydialog ")
        .title_style(
            Style::default()
                .fg(theme.mauve())
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.overlay0()))
        .style(Style::default().bg(theme.base()));
    frame.render_widget(Paragraph::new(lines).block(block), main);

    let status_line = Paragraph::new(status).style(
        Style::default()
            .fg(theme.subtext0())
            .bg(theme.surface0()),
    );
    frame.render_widget(status_line, status_area);
}
