/// All messages (triggers) that can flow through the host event loop.
///
/// Sources:
/// - Host layout engine    → `LayoutReady`
/// - Mutation observer     → `TreeChanged`
/// - Settings UI callbacks → `SettingsChanged`
/// - Settings file watcher → `SettingsFileChanged`
/// - Signal handler        → `Shutdown`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The board layout finished its first render — run the initial colorize.
    LayoutReady,
    /// Structural change in the element tree (lane/card added or removed).
    TreeChanged,
    /// A settings control changed a value — already saved, repaint only.
    SettingsChanged,
    /// The settings file was edited on disk — reload, then repaint.
    SettingsFileChanged,
    /// Graceful shutdown requested — strip applied styles before exit.
    Shutdown,
}
