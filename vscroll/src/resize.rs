use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of an observable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate a new process-unique id.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__node_{}", self.0)
    }
}

/// Content box size of an observed node, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxSize {
    pub width: u32,
    pub height: u32,
}

impl BoxSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A size change reported by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeChange {
    pub size: BoxSize,
    pub width_changed: bool,
    pub height_changed: bool,
}

/// Watches a single node for box-size changes.
///
/// At most one node is observed. Attaching to a new node detaches the old one
/// first, and notifications for any node other than the current target are
/// dropped, so a swapped-out node can never feed stale sizes back.
#[derive(Debug, Default)]
pub struct ResizeBridge {
    target: Option<NodeId>,
    last: Option<BoxSize>,
}

impl ResizeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `node`. Observing the current target again is a no-op.
    pub fn observe(&mut self, node: NodeId) {
        if self.target == Some(node) {
            return;
        }
        self.disconnect();
        log::debug!("[resize] observing {}", node);
        self.target = Some(node);
    }

    /// Stop observing. Returns the node that was observed, if any.
    pub fn disconnect(&mut self) -> Option<NodeId> {
        let previous = self.target.take();
        if let Some(node) = previous {
            log::debug!("[resize] disconnected {}", node);
        }
        self.last = None;
        previous
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn is_observing(&self) -> bool {
        self.target.is_some()
    }

    /// Last size delivered for the current target.
    pub fn last_size(&self) -> Option<BoxSize> {
        self.last
    }

    /// Feed a size observation.
    ///
    /// Returns `None` when `node` is not the current target or nothing changed.
    pub fn notify(&mut self, node: NodeId, size: BoxSize) -> Option<ResizeChange> {
        if self.target != Some(node) {
            log::trace!("[resize] ignoring size of unobserved {}", node);
            return None;
        }
        let previous = self.last.replace(size);
        let (width_changed, height_changed) = match previous {
            Some(prev) => (prev.width != size.width, prev.height != size.height),
            None => (true, true),
        };
        if !width_changed && !height_changed {
            return None;
        }
        Some(ResizeChange {
            size,
            width_changed,
            height_changed,
        })
    }
}
