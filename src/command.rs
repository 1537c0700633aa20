#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    ClearScreen,
    Quit,
    /// Line shown in the status bar of the demo screen.
    Notify(String),
}
