use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::trace;

static NEXT_LIST_TAG: AtomicU32 = AtomicU32::new(0);

/// Handle to a node stored in a [`LinkedList`]
///
/// Handles are plain copies and never keep a node alive. Once the node is
/// removed, every lookup through an old handle returns `None`. A handle
/// also carries the tag of the list that issued it, so another list never
/// resolves it. Clones of a list share its tag and its handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    list: u32,
    slot: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.slot)
    }
}

/// A single link of the chain: one value and a forward reference
#[derive(Debug, Clone)]
pub struct Node<T> {
    id: NodeId,
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant {
        generation: u32,
        next_free: Option<usize>,
    },
}

/// Singly linked list backed by a slot arena
///
/// `len()` always equals the number of nodes reachable from `head()` unless
/// [`LinkedList::set_next`] was used to splice the chain by hand.
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    tag: u32,
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    head: Option<NodeId>,
    length: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            tag: NEXT_LIST_TAG.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free_head: None,
            head: None,
            length: 0,
        }
    }

    /// Build a list holding `values` in order
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        values.into_iter().collect()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Resolve a handle, returning `None` for stale or foreign handles
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.slot) {
            Some(Slot::Occupied(node)) if node.id == id => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.slot) {
            Some(Slot::Occupied(node)) if node.id == id => Some(node),
            _ => None,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::next)
    }

    /// Insert `value` as the new head and return its handle
    pub fn insert_at_head(&mut self, value: T) -> NodeId {
        let id = self.allocate(value, self.head);
        self.head = Some(id);
        self.length += 1;
        trace!(node = %id, len = self.length, "inserted at head");
        id
    }

    /// Insert `value` right after the first node matching `predicate`
    ///
    /// The predicate receives each node with its index. Returns the new
    /// node's handle, or `None` without touching the list when no node
    /// matches.
    pub fn insert<P>(&mut self, value: T, predicate: P) -> Option<NodeId>
    where
        P: FnMut(&Node<T>, usize) -> bool,
    {
        let after = self.find(predicate)?;
        self.insert_after(after, value)
    }

    /// Insert `value` right after the node `after`
    pub fn insert_after(&mut self, after: NodeId, value: T) -> Option<NodeId> {
        let next = self.node(after)?.next;
        Some(self.link(after, next, value))
    }

    fn link(&mut self, after: NodeId, next: Option<NodeId>, value: T) -> NodeId {
        let id = self.allocate(value, next);
        if let Some(node) = self.node_mut(after) {
            node.next = Some(id);
        }
        self.length += 1;
        trace!(node = %id, after = %after, len = self.length, "inserted");
        id
    }

    /// Find the first node, in traversal order, matching `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&Node<T>, usize) -> bool,
    {
        self.nodes()
            .enumerate()
            .find(|(index, node)| predicate(node, *index))
            .map(|(_, node)| node.id)
    }

    /// Unlink the head node and return its value
    pub fn remove_head(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = self.next(head);
        self.length = self.length.saturating_sub(1);
        trace!(node = %head, len = self.length, "removed head");
        self.release(head)
    }

    /// Unlink the node following `predecessor` and return its value
    pub fn remove_after(&mut self, predecessor: NodeId) -> Option<T> {
        let target = self.next(predecessor)?;
        let after = self.next(target);
        if let Some(node) = self.node_mut(predecessor) {
            node.next = after;
        }
        self.length = self.length.saturating_sub(1);
        trace!(node = %target, after = %predecessor, len = self.length, "removed");
        self.release(target)
    }

    /// Redirect the forward link of `id`
    ///
    /// This is the only way to build a cyclic chain, and it leaves `len()`
    /// untouched. Cyclic lists are meant for the cycle detector only.
    /// Returns `false` when `id` or `target` does not resolve.
    pub fn set_next(&mut self, id: NodeId, target: Option<NodeId>) -> bool {
        if target.is_some_and(|t| !self.contains(t)) {
            return false;
        }
        match self.node_mut(id) {
            Some(node) => {
                node.next = target;
                true
            }
            None => false,
        }
    }

    /// Last node of the chain
    pub fn tail(&self) -> Option<NodeId> {
        self.nodes().last().map(Node::id)
    }

    /// Index of `id` counted from the head
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes().position(|node| node.id == id)
    }

    /// Nodes in traversal order
    ///
    /// Yields at most `len()` nodes, so a spliced cyclic chain still ends.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            list: self,
            current: self.head,
            remaining: self.length,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes().map(Node::value)
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn allocate(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        match self.free_head {
            Some(slot) => {
                let generation = match &self.slots[slot] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free_head = *next_free;
                        *generation
                    }
                    Slot::Occupied(node) => node.id.generation.wrapping_add(1),
                };
                let id = NodeId {
                    list: self.tag,
                    slot,
                    generation,
                };
                self.slots[slot] = Slot::Occupied(Node { id, value, next });
                id
            }
            None => {
                let id = NodeId {
                    list: self.tag,
                    slot: self.slots.len(),
                    generation: 0,
                };
                self.slots.push(Slot::Occupied(Node { id, value, next }));
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Option<T> {
        self.node(id)?;
        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        self.free_head = Some(id.slot);
        match std::mem::replace(&mut self.slots[id.slot], vacant) {
            Slot::Occupied(node) => Some(node.value),
            Slot::Vacant { .. } => None,
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail: Option<NodeId> = None;
        for value in iter {
            tail = Some(match tail {
                Some(prev) => list.link(prev, None, value),
                None => list.insert_at_head(value),
            });
        }
        list
    }
}

/// Iterator over the nodes of a [`LinkedList`]
pub struct Nodes<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.current?)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(node)
    }
}
