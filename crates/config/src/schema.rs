use serde::{Deserialize, Serialize};

/// The flat settings record driving both style passes.
///
/// Persisted as camelCase JSON so records written by earlier versions of the
/// plugin load unchanged.  Container-level `#[serde(default)]` gives the
/// merge semantics the store needs: keys present in the stored record win,
/// missing keys take the defaults below.
///
/// Opacities are 0–1 factors; an empty custom color string means "unset"
/// (the paired use-tag-colors flag decides the fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    // ── Lanes ─────────────────────────────────────────────────────────────────
    /// Lane border width in pixels.
    pub lane_border_width: u32,
    pub lane_border_opacity: f64,
    /// Lane header background opacity.
    pub lane_bg_opacity: f64,
    pub lane_content_bg_opacity: f64,
    /// "Add a card" button background opacity.
    pub lane_button_bg_opacity: f64,
    pub lane_button_border_opacity: f64,
    pub lane_button_border_width: u32,
    /// Overrides the tag-derived lane border color when non-empty.
    pub custom_lane_border_color: String,
    pub use_lane_tag_colors: bool,
    /// Lane max height as a viewport percentage; `0` switches to the fixed
    /// pixel height below.
    pub lane_max_height_percent: u32,
    pub lane_max_height_px: u32,

    // ── Cards ─────────────────────────────────────────────────────────────────
    pub card_border_width: u32,
    pub card_border_opacity: f64,
    pub card_header_opacity: f64,
    pub card_body_opacity: f64,
    /// Overrides the tag-derived card border color when non-empty.
    pub custom_border_color: String,
    pub use_tag_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lane_border_width: 2,
            lane_border_opacity: 1.0,
            lane_bg_opacity: 0.2,
            lane_content_bg_opacity: 0.1,
            lane_button_bg_opacity: 0.1,
            lane_button_border_opacity: 0.5,
            lane_button_border_width: 1,
            custom_lane_border_color: String::new(),
            use_lane_tag_colors: true,
            lane_max_height_percent: 100,
            lane_max_height_px: 600,

            card_border_width: 2,
            card_border_opacity: 1.0,
            card_header_opacity: 0.5,
            card_body_opacity: 0.2,
            custom_border_color: String::new(),
            use_tag_colors: true,
        }
    }
}
