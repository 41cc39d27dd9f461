//! Class names of the kanban board view — the host app's published DOM
//! contract.  The "add a card" button has no class of its own; it is the
//! `button` child of [`ITEM_BUTTON_WRAPPER`].

pub const LANE: &str = "kanban-plugin__lane";
pub const LANE_HEADER: &str = "kanban-plugin__lane-header-wrapper";
pub const LANE_ITEMS: &str = "kanban-plugin__lane-items";
pub const ITEM: &str = "kanban-plugin__item";
pub const ITEM_TITLE: &str = "kanban-plugin__item-title-wrapper";
pub const ITEM_METADATA: &str = "kanban-plugin__item-metadata-wrapper";
pub const ITEM_BUTTON_WRAPPER: &str = "kanban-plugin__item-button-wrapper";
