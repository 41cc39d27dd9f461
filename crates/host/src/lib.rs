//! Host-side runtime for the boardtint extension.
//!
//! Owns the board document and wires the trigger sources together:
//! - layout-ready signal        → initial colorize
//! - structural mutation stream → re-colorize
//! - settings file watcher      → reload + re-colorize
//! - ctrl-c                     → strip applied styles, exit
//!
//! All triggers drain serially through one `select!` loop on a
//! current-thread runtime, so style passes can never overlap.

pub mod fixture;
pub mod plugin;

pub use fixture::BoardFixture;
pub use plugin::Plugin;

use std::path::PathBuf;

use tracing::{info, warn};

use boardtint_config::{default_path, SettingsStore, SettingsWatcher};
use boardtint_core::{Message, Result};
use boardtint_dom::{Document, ObserveOptions};

/// Start the demo host.  Blocks until ctrl-c.
pub fn run() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(event_loop())
}

/// Board description path (`BOARDTINT_BOARD` overrides the default).
fn board_path() -> PathBuf {
    std::env::var("BOARDTINT_BOARD")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("board.toml"))
}

async fn event_loop() -> Result<()> {
    let mut plugin = Plugin::load(SettingsStore::new(default_path()))?;
    let mut doc = BoardFixture::load(board_path()).unwrap_or_default().build();

    // Structural scope only; the plugin's own style writes must never feed
    // back into the trigger stream.
    let mut mutations = doc.observe(ObserveOptions::structural());
    let (_watcher, mut settings_rx) = SettingsWatcher::spawn(default_path());

    handle(&mut plugin, &mut doc, Message::LayoutReady);

    loop {
        let message = tokio::select! {
            Some(_) = mutations.recv() => Message::TreeChanged,
            Some(()) = settings_rx.recv() => Message::SettingsFileChanged,
            _ = tokio::signal::ctrl_c() => Message::Shutdown,
        };

        if !handle(&mut plugin, &mut doc, message) {
            return Ok(());
        }
    }
}

/// Dispatch one trigger.  Returns `false` once the host should exit.
fn handle(plugin: &mut Plugin, doc: &mut Document, message: Message) -> bool {
    match message {
        Message::LayoutReady => {
            info!("Layout ready, running initial colorize");
            plugin.colorize(doc);
        }
        Message::TreeChanged | Message::SettingsChanged => plugin.colorize(doc),
        Message::SettingsFileChanged => {
            if let Err(e) = plugin.reload(doc) {
                warn!("Settings reload failed: {e}");
            }
        }
        Message::Shutdown => {
            info!("Shutting down, stripping applied styles");
            plugin.unload(doc);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardtint_config::SettingsStore;
    use boardtint_dom::Selector;
    use boardtint_painter::classes;

    fn loaded_plugin(dir: &tempfile::TempDir) -> Plugin {
        Plugin::load(SettingsStore::new(dir.path().join("settings.json"))).unwrap()
    }

    #[test]
    fn layout_ready_paints_and_shutdown_strips() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = loaded_plugin(&dir);
        let mut doc = BoardFixture::default().build();
        let lane = doc.query(doc.root(), &Selector::class(classes::LANE)).unwrap();

        assert!(handle(&mut plugin, &mut doc, Message::LayoutReady));
        assert!(doc.style_attr(lane).is_some());

        assert!(!handle(&mut plugin, &mut doc, Message::Shutdown));
        assert_eq!(doc.style_attr(lane), None);
    }

    #[test]
    fn tree_change_restyles_late_arrivals() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = loaded_plugin(&dir);
        let mut doc = BoardFixture::default().build();
        handle(&mut plugin, &mut doc, Message::LayoutReady);

        // A card appears after the initial pass, as if the user typed it in.
        let items_sel = Selector::class(classes::LANE_ITEMS);
        let items = doc.query(doc.root(), &items_sel).unwrap();
        let card = doc.create_element("div");
        doc.add_class(card, classes::ITEM);
        let title = doc.create_element("div");
        doc.add_class(title, classes::ITEM_TITLE);
        let body = doc.create_element("div");
        doc.add_class(body, classes::ITEM_METADATA);
        doc.append_child(card, title);
        doc.append_child(card, body);
        doc.append_child(items, card);
        assert_eq!(doc.style_attr(card), None);

        assert!(handle(&mut plugin, &mut doc, Message::TreeChanged));
        assert!(doc.style_attr(card).is_some());
    }
}
