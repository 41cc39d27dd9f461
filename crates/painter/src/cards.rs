use boardtint_config::Settings;
use boardtint_dom::{Document, Selector, StylePatch};
use boardtint_theme::{blend, tag_color};

use crate::{classes, CORNER_RADIUS};

/// Style every card that has both its title wrapper and metadata wrapper.
/// Cards missing either are skipped whole.
pub fn style_cards(doc: &mut Document, settings: &Settings) {
    for card in doc.query_all(doc.root(), &Selector::class(classes::ITEM)) {
        let Some(header) = doc.query(card, &Selector::class(classes::ITEM_TITLE)) else {
            continue;
        };
        let Some(body) = doc.query(card, &Selector::class(classes::ITEM_METADATA)) else {
            continue;
        };

        let tag = tag_color(doc, header);
        let patches = card_patches(settings, &tag);

        doc.apply_patches(card, &patches.card);
        doc.apply_patches(header, &patches.header);
        doc.apply_patches(body, &patches.body);
    }
}

pub(crate) struct CardPatches {
    pub(crate) card: Vec<StylePatch>,
    pub(crate) header: Vec<StylePatch>,
    pub(crate) body: Vec<StylePatch>,
}

/// Derive every card patch from settings + tag color.  Pure: no DOM access.
pub(crate) fn card_patches(settings: &Settings, tag: &str) -> CardPatches {
    let border_source = if !settings.custom_border_color.is_empty() {
        settings.custom_border_color.as_str()
    } else if settings.use_tag_colors {
        tag
    } else {
        "#000"
    };
    let border = blend(border_source, settings.card_border_opacity);

    let header_bg = blend(tag, settings.card_header_opacity);
    let body_bg = blend(tag, settings.card_body_opacity);

    CardPatches {
        card: vec![
            StylePatch::important(
                "border",
                format!("{}px solid {border}", settings.card_border_width),
            ),
            StylePatch::important("border-radius", CORNER_RADIUS),
        ],
        header: vec![StylePatch::important("background-color", header_bg)],
        body: vec![StylePatch::important("background-color", body_bg)],
    }
}
