//! Style applicator for the kanban board view.
//!
//! Two idempotent passes (lanes, then cards), each re-run on every trigger.
//! A pass always computes from current settings + current tree state and
//! writes forced inline declarations; it never accumulates state of its own.

pub mod cards;
pub mod classes;
pub mod lanes;

pub use cards::style_cards;
pub use lanes::style_lanes;

use boardtint_config::Settings;
use boardtint_dom::{Document, Selector};

/// Fixed corner rounding for cards and lane buttons.
pub(crate) const CORNER_RADIUS: &str = "6px";

/// Run both style passes.  Safe to call on every layout/mutation trigger.
pub fn colorize(doc: &mut Document, settings: &Settings) {
    style_lanes(doc, settings);
    style_cards(doc, settings);
}

/// Remove every inline declaration the passes may have written, restoring
/// stylesheet defaults on unload.
pub fn strip_styles(doc: &mut Document) {
    const STYLED_CLASSES: [&str; 6] = [
        classes::ITEM,
        classes::ITEM_TITLE,
        classes::ITEM_METADATA,
        classes::LANE,
        classes::LANE_ITEMS,
        classes::ITEM_BUTTON_WRAPPER,
    ];

    for class in STYLED_CLASSES {
        for element in doc.query_all(doc.root(), &Selector::class(class)) {
            doc.clear_inline_styles(element);
        }
    }

    // The "add a card" buttons have no class of their own.
    for wrapper in doc.query_all(doc.root(), &Selector::class(classes::ITEM_BUTTON_WRAPPER)) {
        for button in doc.query_all(wrapper, &Selector::tag("button")) {
            doc.clear_inline_styles(button);
        }
    }
}
