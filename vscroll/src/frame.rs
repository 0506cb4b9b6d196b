use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Animation-frame batching.
///
/// Any number of requests between two frames collapse into one pending
/// frame. The embedder calls `begin_frame` from its frame callback and runs
/// the deferred work only when it returns true.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    scheduled: AtomicBool,
    coalesced: AtomicU64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame.
    ///
    /// Returns true if this call scheduled it, false if one was already
    /// pending and the request was folded into it.
    pub fn request(&self) -> bool {
        let newly = !self.scheduled.swap(true, Ordering::SeqCst);
        if !newly {
            self.coalesced.fetch_add(1, Ordering::Relaxed);
        }
        newly
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled.load(Ordering::SeqCst)
    }

    /// Consume the pending frame. Returns whether one was pending.
    pub fn begin_frame(&self) -> bool {
        self.scheduled.swap(false, Ordering::SeqCst)
    }

    /// Number of requests folded into an already pending frame.
    pub fn coalesced(&self) -> u64 {
        self.coalesced.load(Ordering::Relaxed)
    }
}
