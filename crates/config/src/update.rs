use crate::schema::Settings;

/// One settings control changing one value.  The host settings surface binds
/// each slider (opacities 0–1, widths 0–10 / 0–5), toggle and color picker to
/// one variant; every applied update is followed by save + recolorize on the
/// host side.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsUpdate {
    // ── Lanes ─────────────────────────────────────────────────────────────────
    LaneBorderWidth(u32),
    LaneBorderOpacity(f64),
    LaneBgOpacity(f64),
    LaneContentBgOpacity(f64),
    LaneButtonBgOpacity(f64),
    LaneButtonBorderOpacity(f64),
    LaneButtonBorderWidth(u32),
    /// Setting a concrete color switches the lane pass off tag colors.
    CustomLaneBorderColor(String),
    /// Enabling tag colors discards any custom lane border color.
    UseLaneTagColors(bool),
    LaneMaxHeightPercent(u32),
    LaneMaxHeightPx(u32),

    // ── Cards ─────────────────────────────────────────────────────────────────
    CardBorderWidth(u32),
    CardBorderOpacity(f64),
    CardHeaderOpacity(f64),
    CardBodyOpacity(f64),
    /// Setting a concrete color switches the card pass off tag colors.
    CustomBorderColor(String),
    /// Enabling tag colors discards any custom card border color.
    UseTagColors(bool),
}

impl Settings {
    /// Apply one update.
    ///
    /// The use-tag-colors flags and their custom colors are mutually
    /// exclusive in both directions.  Opacity factors are clamped to [0, 1]
    /// here, at the mutation boundary; `blend` itself never clamps.
    pub fn apply(&mut self, update: SettingsUpdate) {
        use SettingsUpdate::*;

        match update {
            LaneBorderWidth(px) => self.lane_border_width = px,
            LaneBorderOpacity(o) => self.lane_border_opacity = clamped(o),
            LaneBgOpacity(o) => self.lane_bg_opacity = clamped(o),
            LaneContentBgOpacity(o) => self.lane_content_bg_opacity = clamped(o),
            LaneButtonBgOpacity(o) => self.lane_button_bg_opacity = clamped(o),
            LaneButtonBorderOpacity(o) => self.lane_button_border_opacity = clamped(o),
            LaneButtonBorderWidth(px) => self.lane_button_border_width = px,
            CustomLaneBorderColor(color) => {
                self.custom_lane_border_color = color;
                self.use_lane_tag_colors = false;
            }
            UseLaneTagColors(enabled) => {
                self.use_lane_tag_colors = enabled;
                if enabled {
                    self.custom_lane_border_color.clear();
                }
            }
            LaneMaxHeightPercent(vh) => self.lane_max_height_percent = vh,
            LaneMaxHeightPx(px) => self.lane_max_height_px = px,

            CardBorderWidth(px) => self.card_border_width = px,
            CardBorderOpacity(o) => self.card_border_opacity = clamped(o),
            CardHeaderOpacity(o) => self.card_header_opacity = clamped(o),
            CardBodyOpacity(o) => self.card_body_opacity = clamped(o),
            CustomBorderColor(color) => {
                self.custom_border_color = color;
                self.use_tag_colors = false;
            }
            UseTagColors(enabled) => {
                self.use_tag_colors = enabled;
                if enabled {
                    self.custom_border_color.clear();
                }
            }
        }
    }
}

fn clamped(opacity: f64) -> f64 {
    opacity.clamp(0.0, 1.0)
}
