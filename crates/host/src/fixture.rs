use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use boardtint_core::{Result, TintError};
use boardtint_dom::{Document, NodeId};
use boardtint_painter::classes;
use boardtint_theme::blend;

/// Demo board description parsed from `board.toml`.
///
/// The fixture stands in for the note file the real host renders: it names
/// lanes, their cards, and the tag color the host theme assigns to each
/// heading's hash-tag link.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardFixture {
    pub lanes: Vec<LaneFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaneFixture {
    pub title: String,
    /// Tag color as hex or functional string; `None` renders an untagged lane.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub cards: Vec<CardFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardFixture {
    pub title: String,
    #[serde(default)]
    pub tag: Option<String>,
}

impl BoardFixture {
    /// Load a board description from a TOML file.  Returns the built-in
    /// sample board if the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "Board file not found at '{}'; using the sample board.",
                path.display()
            );
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| TintError::Board(format!("cannot read '{}': {e}", path.display())))?;

        toml::from_str(&raw).map_err(|e| TintError::Board(format!("TOML parse error: {e}")))
    }

    /// Build the element tree the way the host app renders this board.
    pub fn build(&self) -> Document {
        let mut doc = Document::new();
        let root = doc.root();

        for lane in &self.lanes {
            debug!(lane = %lane.title, cards = lane.cards.len(), "building lane");

            let lane_el = classed_div(&mut doc, root, classes::LANE);
            let header = classed_div(&mut doc, lane_el, classes::LANE_HEADER);
            if let Some(color) = &lane.tag {
                tag_link(&mut doc, header, color);
            }

            let items = classed_div(&mut doc, lane_el, classes::LANE_ITEMS);
            for card in &lane.cards {
                let card_el = classed_div(&mut doc, items, classes::ITEM);
                let title = classed_div(&mut doc, card_el, classes::ITEM_TITLE);
                if let Some(color) = &card.tag {
                    tag_link(&mut doc, title, color);
                }
                classed_div(&mut doc, card_el, classes::ITEM_METADATA);
            }

            let wrapper = classed_div(&mut doc, lane_el, classes::ITEM_BUTTON_WRAPPER);
            let button = doc.create_element("button");
            doc.append_child(wrapper, button);
        }

        doc
    }
}

impl Default for BoardFixture {
    /// Three-lane sample board so the demo binary works out of the box.
    fn default() -> Self {
        let card = |title: &str, tag: Option<&str>| CardFixture {
            title: title.to_string(),
            tag: tag.map(str::to_string),
        };

        Self {
            lanes: vec![
                LaneFixture {
                    title: "To do".to_string(),
                    tag: Some("#f38ba8".to_string()), // Catppuccin Mocha — red
                    cards: vec![
                        card("Water the plants", Some("#f38ba8")),
                        card("File the expense report", None),
                    ],
                },
                LaneFixture {
                    title: "Doing".to_string(),
                    tag: Some("#89b4fa".to_string()), // Catppuccin Mocha — blue
                    cards: vec![card("Draft the release notes", Some("#89b4fa"))],
                },
                LaneFixture {
                    title: "Done".to_string(),
                    tag: None,
                    cards: vec![card("Book the offsite venue", Some("#a6e3a1"))],
                },
            ],
        }
    }
}

fn classed_div(doc: &mut Document, parent: NodeId, class: &str) -> NodeId {
    let id = doc.create_element("div");
    doc.add_class(id, class);
    doc.append_child(parent, id);
    id
}

/// Append the heading's hash-tag link with the background color the host's
/// cascade would resolve for it.
fn tag_link(doc: &mut Document, parent: NodeId, color: &str) {
    let tag = doc.create_element("a");
    doc.add_class(tag, "tag");
    let resolved = if color.starts_with('#') {
        blend(color, 1.0)
    } else {
        color.to_string()
    };
    doc.set_resolved_style(tag, "background-color", &resolved);
    doc.append_child(parent, tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardtint_dom::Selector;
    use boardtint_theme::tag_color;

    #[test]
    fn parses_a_board_description() {
        let fixture: BoardFixture = toml::from_str(
            r##"
            [[lanes]]
            title = "Inbox"
            tag = "#abc"

            [[lanes.cards]]
            title = "First card"
            tag = "rgb(1,2,3)"
            "##,
        )
        .unwrap();

        assert_eq!(fixture.lanes.len(), 1);
        assert_eq!(fixture.lanes[0].title, "Inbox");
        assert_eq!(fixture.lanes[0].cards[0].tag.as_deref(), Some("rgb(1,2,3)"));
    }

    #[test]
    fn build_produces_the_documented_class_structure() {
        let doc = BoardFixture::default().build();
        let root = doc.root();

        let lanes = doc.query_all(root, &Selector::class(classes::LANE));
        assert_eq!(lanes.len(), 3);
        assert_eq!(doc.query_all(root, &Selector::class(classes::ITEM)).len(), 4);

        for lane in lanes {
            assert!(doc.query(lane, &Selector::class(classes::LANE_HEADER)).is_some());
            assert!(doc.query(lane, &Selector::class(classes::LANE_ITEMS)).is_some());
            let wrapper = doc
                .query(lane, &Selector::class(classes::ITEM_BUTTON_WRAPPER))
                .unwrap();
            assert!(doc.query(wrapper, &Selector::tag("button")).is_some());
        }
    }

    #[test]
    fn hex_tags_resolve_to_functional_colors() {
        let doc = BoardFixture::default().build();
        let first_lane = doc.query(doc.root(), &Selector::class(classes::LANE)).unwrap();
        let header = doc
            .query(first_lane, &Selector::class(classes::LANE_HEADER))
            .unwrap();
        // #f38ba8 resolved by the cascade stand-in.
        assert_eq!(tag_color(&doc, header), "rgba(243,139,168,1)");
    }

    #[test]
    fn untagged_lane_header_has_no_tag_link() {
        let doc = BoardFixture::default().build();
        let lanes = doc.query_all(doc.root(), &Selector::class(classes::LANE));
        let done = lanes[2];
        let header = doc.query(done, &Selector::class(classes::LANE_HEADER)).unwrap();
        assert!(doc
            .query(header, &Selector::tag("a").with_class("tag"))
            .is_none());
    }

    #[test]
    fn missing_board_file_falls_back_to_sample() {
        let fixture = BoardFixture::load("/nonexistent/board.toml").unwrap();
        assert_eq!(fixture.lanes.len(), 3);
    }
}
