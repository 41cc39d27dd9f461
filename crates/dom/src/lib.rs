pub mod selector;
pub mod style;
pub mod tree;

pub use selector::Selector;
pub use style::{Priority, StyleDecl, StylePatch};
pub use tree::{Document, NodeId, ObserveOptions, TreeChange};
