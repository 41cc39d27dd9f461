pub mod colors;

pub use colors::blend;

use boardtint_dom::{Document, NodeId, Selector};

/// Neutral gray used when a lane/card heading carries no tag.
pub const DEFAULT_TAG_COLOR: &str = "rgb(128,128,128)";

/// Effective tag color of a subtree: the computed background of the first
/// `a.tag` descendant.  No tag, or a tag the cascade gave no background,
/// falls back to [`DEFAULT_TAG_COLOR`]; absence is not an error.
pub fn tag_color(doc: &Document, scope: NodeId) -> String {
    let tag_link = Selector::tag("a").with_class("tag");
    match doc.query(scope, &tag_link) {
        Some(tag) => match doc.computed_style(tag, "background-color") {
            Some(bg) if !bg.is_empty() => bg.to_string(),
            _ => DEFAULT_TAG_COLOR.to_string(),
        },
        None => DEFAULT_TAG_COLOR.to_string(),
    }
}
