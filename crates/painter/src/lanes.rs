use boardtint_config::Settings;
use boardtint_dom::{Document, Selector, StylePatch};
use boardtint_theme::{blend, tag_color};

use crate::{classes, CORNER_RADIUS};

/// Style every lane that still has its full structure: header wrapper,
/// items content, button wrapper and the "add a card" button inside it.
/// Lanes missing any of the four are skipped whole, never half-styled.
pub fn style_lanes(doc: &mut Document, settings: &Settings) {
    for lane in doc.query_all(doc.root(), &Selector::class(classes::LANE)) {
        let Some(header) = doc.query(lane, &Selector::class(classes::LANE_HEADER)) else {
            continue;
        };
        let Some(content) = doc.query(lane, &Selector::class(classes::LANE_ITEMS)) else {
            continue;
        };
        let Some(wrapper) = doc.query(lane, &Selector::class(classes::ITEM_BUTTON_WRAPPER)) else {
            continue;
        };
        let Some(button) = doc.query(wrapper, &Selector::tag("button")) else {
            continue;
        };

        let tag = tag_color(doc, header);
        let patches = lane_patches(settings, &tag);

        doc.apply_patches(lane, &patches.lane);
        doc.apply_patches(header, &patches.header);
        doc.apply_patches(content, &patches.content);
        doc.apply_patches(wrapper, &patches.wrapper);
        doc.apply_patches(button, &patches.button);
    }
}

pub(crate) struct LanePatches {
    pub(crate) lane: Vec<StylePatch>,
    pub(crate) header: Vec<StylePatch>,
    pub(crate) content: Vec<StylePatch>,
    pub(crate) wrapper: Vec<StylePatch>,
    pub(crate) button: Vec<StylePatch>,
}

/// Derive every lane patch from settings + tag color.  Pure: no DOM access.
pub(crate) fn lane_patches(settings: &Settings, tag: &str) -> LanePatches {
    let border_source = if !settings.custom_lane_border_color.is_empty() {
        settings.custom_lane_border_color.as_str()
    } else if settings.use_lane_tag_colors {
        tag
    } else {
        "#000"
    };
    let border = blend(border_source, settings.lane_border_opacity);

    let header_bg = blend(tag, settings.lane_bg_opacity);
    // The button wrapper reads as part of the content area, so it gets the
    // content background.
    let content_bg = blend(tag, settings.lane_content_bg_opacity);
    let button_bg = blend(tag, settings.lane_button_bg_opacity);

    // Unlike the lane border, the button border falls back to the tag color
    // even with tag colors disabled.
    let button_border_source = if settings.custom_lane_border_color.is_empty() {
        tag
    } else {
        settings.custom_lane_border_color.as_str()
    };
    let button_border = blend(button_border_source, settings.lane_button_border_opacity);

    let max_height = if settings.lane_max_height_percent > 0 {
        format!("{}vh", settings.lane_max_height_percent)
    } else {
        format!("{}px", settings.lane_max_height_px)
    };

    LanePatches {
        lane: vec![
            StylePatch::important(
                "border",
                format!("{}px solid {border}", settings.lane_border_width),
            ),
            StylePatch::important("max-height", max_height),
            StylePatch::important("overflow-y", "auto"),
        ],
        header: vec![StylePatch::important("background-color", header_bg)],
        content: vec![StylePatch::important("background-color", content_bg.clone())],
        wrapper: vec![StylePatch::important("background-color", content_bg)],
        button: vec![
            StylePatch::important("background-color", button_bg),
            StylePatch::important(
                "border",
                format!("{}px solid {button_border}", settings.lane_button_border_width),
            ),
            StylePatch::important("border-radius", CORNER_RADIUS),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn header_background_blends_tag_with_bg_opacity() {
        let mut doc = Document::new();
        let lane = fixtures::lane(&mut doc, Some("rgb(200,0,0)"));

        let settings = Settings {
            lane_bg_opacity: 0.2,
            ..Settings::default()
        };
        style_lanes(&mut doc, &settings);

        let header_bg = doc.inline_style(lane.header, "background-color").unwrap();
        assert_eq!(header_bg.value, "rgba(200,0,0,0.2)");
    }

    #[test]
    fn lane_missing_button_is_left_completely_unstyled() {
        let mut doc = Document::new();
        let lane = fixtures::lane_without_button(&mut doc, Some("rgb(200,0,0)"));

        style_lanes(&mut doc, &Settings::default());

        assert_eq!(doc.style_attr(lane.lane), None);
        assert_eq!(doc.style_attr(lane.header), None);
        assert_eq!(doc.style_attr(lane.content), None);
        assert_eq!(doc.style_attr(lane.wrapper), None);
    }

    #[test]
    fn untagged_lane_uses_neutral_gray() {
        let mut doc = Document::new();
        let lane = fixtures::lane(&mut doc, None);

        let settings = Settings {
            lane_bg_opacity: 0.5,
            ..Settings::default()
        };
        style_lanes(&mut doc, &settings);

        let header_bg = doc.inline_style(lane.header, "background-color").unwrap();
        assert_eq!(header_bg.value, "rgba(128,128,128,0.5)");
    }

    #[test]
    fn border_prefers_custom_color_over_tag() {
        let settings = Settings {
            custom_lane_border_color: "#112233".to_string(),
            lane_border_width: 3,
            ..Settings::default()
        };
        let patches = lane_patches(&settings, "rgb(200,0,0)");
        assert_eq!(patches.lane[0].value, "3px solid rgba(17,34,51,1)");
    }

    #[test]
    fn border_falls_back_to_black_when_tag_colors_disabled() {
        let settings = Settings {
            use_lane_tag_colors: false,
            ..Settings::default()
        };
        let patches = lane_patches(&settings, "rgb(200,0,0)");
        assert_eq!(patches.lane[0].value, "2px solid rgba(0,0,0,1)");
    }

    #[test]
    fn button_border_ignores_the_tag_colors_flag() {
        let settings = Settings {
            use_lane_tag_colors: false,
            ..Settings::default()
        };
        let patches = lane_patches(&settings, "rgb(10,20,30)");
        // lane_button_border_opacity defaults to 0.5
        assert_eq!(patches.button[1].value, "1px solid rgba(10,20,30,0.5)");
    }

    #[test]
    fn wrapper_shares_the_content_background() {
        let patches = lane_patches(&Settings::default(), "rgb(10,20,30)");
        assert_eq!(patches.content[0].value, patches.wrapper[0].value);
    }

    #[test]
    fn max_height_uses_viewport_percent_when_positive() {
        let settings = Settings {
            lane_max_height_percent: 80,
            ..Settings::default()
        };
        let patches = lane_patches(&settings, "rgb(0,0,0)");
        assert_eq!(patches.lane[1].value, "80vh");
    }

    #[test]
    fn max_height_falls_back_to_fixed_pixels() {
        let settings = Settings {
            lane_max_height_percent: 0,
            lane_max_height_px: 480,
            ..Settings::default()
        };
        let patches = lane_patches(&settings, "rgb(0,0,0)");
        assert_eq!(patches.lane[1].value, "480px");
        assert_eq!(patches.lane[2].value, "auto");
        assert_eq!(patches.lane[2].property, "overflow-y");
    }

    #[test]
    fn every_lane_patch_is_forced() {
        use boardtint_dom::Priority;
        let patches = lane_patches(&Settings::default(), "rgb(1,2,3)");
        for patch in patches
            .lane
            .iter()
            .chain(&patches.header)
            .chain(&patches.content)
            .chain(&patches.wrapper)
            .chain(&patches.button)
        {
            assert_eq!(patch.priority, Priority::Important, "{}", patch.property);
        }
    }
}
