use std::collections::BTreeMap;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::selector::Selector;
use crate::style::{Priority, StyleDecl, StylePatch};

/// Handle to an element in a [`Document`].
///
/// Handles stay valid for the lifetime of the document, even after the
/// element is detached from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Change notification delivered to registered observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeChange {
    /// Children of `parent` were added or removed.
    ChildList { parent: NodeId },
    /// The inline style attribute of `node` was written or cleared.
    Attribute { node: NodeId },
}

/// Which kinds of changes an observer is notified about.
///
/// The colorize pipeline must observe with [`ObserveOptions::structural`]:
/// style writes then stay invisible to it, so a pass can never re-trigger
/// itself through its own output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserveOptions {
    /// Notify when children are added to or removed from a watched element.
    pub child_list: bool,
    /// Watch the whole subtree, not just the document root's direct children.
    pub subtree: bool,
    /// Notify on inline style (attribute) writes.
    pub attributes: bool,
}

impl ObserveOptions {
    /// Child-list changes anywhere in the tree; attribute writes excluded.
    pub const fn structural() -> Self {
        Self {
            child_list: true,
            subtree: true,
            attributes: false,
        }
    }
}

struct Node {
    tag: String,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Property values the host's cascade resolved for this element.
    resolved: BTreeMap<String, String>,
    /// Inline declarations written through [`Document::apply_patches`].
    inline: BTreeMap<String, StyleDecl>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            parent: None,
            children: Vec::new(),
            resolved: BTreeMap::new(),
            inline: BTreeMap::new(),
        }
    }
}

struct Observer {
    options: ObserveOptions,
    tx: UnboundedSender<TreeChange>,
}

/// In-memory element tree mirroring the host's rendered board view.
///
/// Elements are arena-allocated and addressed by [`NodeId`]; the tree owns
/// them for its whole lifetime.  Structure is read through selector queries
/// and written through child insertion/removal; presentation is written
/// exclusively as inline style declarations.
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    observers: Vec<Observer>,
}

impl Document {
    /// Create an empty document with a `body` root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body")],
            root: NodeId(0),
            observers: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a detached element.  Attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let node = &mut self.nodes[id.0];
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].classes.iter().any(|c| c == class)
    }

    pub fn tag_name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    // ── Structure ─────────────────────────────────────────────────────────────

    /// Attach `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.notify(TreeChange::ChildList { parent });
    }

    /// Detach `child` from `parent`.  The handle stays valid; the element is
    /// simply no longer reachable from the root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.retain(|&c| c != child);
        self.nodes[child.0].parent = None;
        self.notify(TreeChange::ChildList { parent });
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// First descendant of `scope` (in document order) matching `selector`.
    /// The scope element itself is never considered.
    pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if selector.matches(&node.tag, &node.classes) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// All descendants of `scope` matching `selector`, in document order.
    pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if selector.matches(&node.tag, &node.classes) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    // ── Styles ────────────────────────────────────────────────────────────────

    /// Record a property value as resolved by the host's cascade.
    pub fn set_resolved_style(&mut self, id: NodeId, property: &str, value: &str) {
        self.nodes[id.0]
            .resolved
            .insert(property.to_string(), value.to_string());
    }

    /// The value the style engine currently reports for `property`:
    /// an inline declaration if one exists, else the resolved cascade value.
    pub fn computed_style(&self, id: NodeId, property: &str) -> Option<&str> {
        let node = &self.nodes[id.0];
        node.inline
            .get(property)
            .map(|decl| decl.value.as_str())
            .or_else(|| node.resolved.get(property).map(String::as_str))
    }

    /// Write one inline declaration.  Notifies attribute observers only,
    /// never structural ones.
    pub fn set_style_property(
        &mut self,
        id: NodeId,
        property: &str,
        value: &str,
        priority: Priority,
    ) {
        self.nodes[id.0].inline.insert(
            property.to_string(),
            StyleDecl {
                value: value.to_string(),
                priority,
            },
        );
        self.notify(TreeChange::Attribute { node: id });
    }

    /// Apply a batch of patches to one element.
    pub fn apply_patches(&mut self, id: NodeId, patches: &[StylePatch]) {
        for patch in patches {
            self.set_style_property(id, &patch.property, &patch.value, patch.priority);
        }
    }

    /// The inline declaration for `property`, if the plugin wrote one.
    pub fn inline_style(&self, id: NodeId, property: &str) -> Option<&StyleDecl> {
        self.nodes[id.0].inline.get(property)
    }

    /// Serialized inline style attribute, or `None` when nothing is set.
    pub fn style_attr(&self, id: NodeId) -> Option<String> {
        let node = &self.nodes[id.0];
        if node.inline.is_empty() {
            return None;
        }
        let mut out = String::new();
        for (property, decl) in &node.inline {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(property);
            out.push_str(": ");
            out.push_str(&decl.value);
            if decl.priority == Priority::Important {
                out.push_str(" !important");
            }
            out.push(';');
        }
        Some(out)
    }

    /// Drop every inline declaration on `id` (`removeAttribute("style")`).
    pub fn clear_inline_styles(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        if node.inline.is_empty() {
            return;
        }
        node.inline.clear();
        self.notify(TreeChange::Attribute { node: id });
    }

    // ── Observation ───────────────────────────────────────────────────────────

    /// Register a mutation observer; changes matching `options` arrive on the
    /// returned channel.  The observer is dropped once the receiver is.
    pub fn observe(&mut self, options: ObserveOptions) -> UnboundedReceiver<TreeChange> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.observers.push(Observer { options, tx });
        rx
    }

    fn notify(&mut self, change: TreeChange) {
        let root = self.root;
        self.observers.retain(|observer| {
            let wanted = match change {
                TreeChange::ChildList { parent } => {
                    observer.options.child_list && (observer.options.subtree || parent == root)
                }
                TreeChange::Attribute { .. } => observer.options.attributes,
            };
            if !wanted {
                return true;
            }
            observer.tx.send(change).is_ok()
        });
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
