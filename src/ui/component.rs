//! Component trait for interactive UI building blocks.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::ui::{Handled, Result};

/// Interactive UI building block.
///
/// Components own their UI state, handle input routed to them by the host,
/// and report outcomes through [`Handled`]. They know nothing about the
/// host's business logic.
///
/// # Examples
///
/// - `Dialog` - modal overlay with actions and an optional prompt
/// - `PromptInput` - single-line text or password field
pub trait Component {
    /// The output type this component produces.
    type Output;

    /// Handle a key event.
    ///
    /// Returns `Ok(Handled::...)` where:
    /// - `Ignored` - key was not handled, parent should process it
    /// - `Consumed` - key was handled but produced no output
    /// - `Event(output)` - key was handled and produced an output
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        _ = key;
        Ok(Handled::Ignored)
    }

    /// Handle a mouse event. Coordinates are absolute terminal cells.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        _ = mouse;
        Ok(Handled::Ignored)
    }

    /// Handle text pasted while bracketed paste is enabled.
    fn handle_paste(&mut self, text: &str) -> Result<Handled<Self::Output>> {
        _ = text;
        Ok(Handled::Ignored)
    }

    /// Called on each tick for time-based updates.
    fn on_tick(&mut self) {}

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}
