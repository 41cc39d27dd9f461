use boardtint_config::{Settings, SettingsStore, SettingsUpdate};
use boardtint_core::Result;
use boardtint_dom::Document;
use tracing::info;

/// The extension itself: the settings record, its store, and the lifecycle
/// surface the host calls into.
pub struct Plugin {
    settings: Settings,
    store: SettingsStore,
}

impl Plugin {
    /// Load-time half of `onLoad`: stored settings merged over defaults.
    pub fn load(store: SettingsStore) -> Result<Self> {
        let settings = store.load()?;
        Ok(Self { settings, store })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Entry point for every layout/mutation trigger.
    pub fn colorize(&self, doc: &mut Document) {
        boardtint_painter::colorize(doc, &self.settings);
    }

    /// A settings control changed one value: apply it, persist immediately,
    /// repaint.
    pub fn apply_update(&mut self, doc: &mut Document, update: SettingsUpdate) -> Result<()> {
        self.settings.apply(update);
        self.store.save(&self.settings)?;
        self.colorize(doc);
        Ok(())
    }

    /// The settings file changed on disk: re-read it, repaint.
    pub fn reload(&mut self, doc: &mut Document) -> Result<()> {
        self.settings = self.store.load()?;
        info!("Settings reloaded from {}", self.store.path().display());
        self.colorize(doc);
        Ok(())
    }

    /// `onUnload`: strip every applied override, restoring stylesheet
    /// defaults.
    pub fn unload(&self, doc: &mut Document) {
        boardtint_painter::strip_styles(doc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::BoardFixture;
    use boardtint_dom::Selector;
    use boardtint_painter::classes;

    fn plugin(dir: &tempfile::TempDir) -> Plugin {
        Plugin::load(SettingsStore::new(dir.path().join("settings.json"))).unwrap()
    }

    #[test]
    fn apply_update_persists_and_repaints() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = plugin(&dir);
        let mut doc = BoardFixture::default().build();

        plugin
            .apply_update(&mut doc, SettingsUpdate::LaneBgOpacity(0.9))
            .unwrap();

        // Persisted…
        let stored = SettingsStore::new(dir.path().join("settings.json"))
            .load()
            .unwrap();
        assert_eq!(stored.lane_bg_opacity, 0.9);

        // …and painted.
        let lane = doc
            .query(doc.root(), &Selector::class(classes::LANE))
            .unwrap();
        let header = doc
            .query(lane, &Selector::class(classes::LANE_HEADER))
            .unwrap();
        assert!(doc.inline_style(header, "background-color").is_some());
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let mut plugin = plugin(&dir);
        let mut doc = BoardFixture::default().build();

        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"laneBorderWidth": 9}"#,
        )
        .unwrap();
        plugin.reload(&mut doc).unwrap();

        assert_eq!(plugin.settings().lane_border_width, 9);
    }

    #[test]
    fn unload_strips_everything_colorize_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let plugin = plugin(&dir);
        let mut doc = BoardFixture::default().build();

        plugin.colorize(&mut doc);
        let lanes = doc.query_all(doc.root(), &Selector::class(classes::LANE));
        assert!(lanes.iter().any(|&l| doc.style_attr(l).is_some()));

        plugin.unload(&mut doc);
        for lane in lanes {
            assert_eq!(doc.style_attr(lane), None);
        }
    }
}
