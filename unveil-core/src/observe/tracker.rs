use crate::foundation::core::{EdgeInsets, Rect, Viewport};

/// Handle for one registered intersection watch.
///
/// Handed out by [`ViewportTracker::watch`] and never reused, so a stale
/// handle after [`ViewportTracker::unwatch`] is inert rather than aliasing a
/// newer registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

/// One reported intersection transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionChange {
    /// Which registration changed.
    pub watch: WatchId,
    /// New intersection state.
    pub intersecting: bool,
}

#[derive(Clone, Debug)]
struct WatchEntry {
    id: WatchId,
    region: Rect,
    margin: EdgeInsets,
    // None until the first evaluation, which therefore always reports.
    last: Option<bool>,
}

/// Intersection-notification service over a scrolling document.
///
/// Regions live in document space; the viewport is a window of the document
/// starting at the current vertical scroll offset (horizontal scroll is fixed
/// at zero). Each registered watch carries its own trigger margin.
/// [`ViewportTracker::observe_scroll`] reports transitions only, in
/// registration order.
#[derive(Clone, Debug)]
pub struct ViewportTracker {
    viewport: Viewport,
    next_id: u64,
    watches: Vec<WatchEntry>,
}

impl ViewportTracker {
    /// Tracker for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            next_id: 0,
            watches: Vec::new(),
        }
    }

    /// Register a document-space region with its trigger margin.
    ///
    /// The watch is evaluated on the next [`ViewportTracker::observe_scroll`]
    /// call; a region already inside the margined viewport then reports
    /// `intersecting: true` immediately.
    pub fn watch(&mut self, region: Rect, margin: EdgeInsets) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.watches.push(WatchEntry {
            id,
            region,
            margin,
            last: None,
        });
        id
    }

    /// Remove a registration. Returns false for unknown or already removed
    /// ids. After removal no change for `id` is ever reported again.
    pub fn unwatch(&mut self, id: WatchId) -> bool {
        let before = self.watches.len();
        self.watches.retain(|w| w.id != id);
        self.watches.len() != before
    }

    /// Number of live registrations.
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Evaluate all live watches at `offset` and report transitions.
    ///
    /// The first evaluation of each watch always reports its state; after
    /// that only changes are reported.
    pub fn observe_scroll(&mut self, offset: f64) -> Vec<IntersectionChange> {
        let viewport = self.viewport;
        let mut changes = Vec::new();
        for entry in &mut self.watches {
            let now = Self::is_intersecting(viewport, entry.region, entry.margin, offset);
            if entry.last != Some(now) {
                entry.last = Some(now);
                changes.push(IntersectionChange {
                    watch: entry.id,
                    intersecting: now,
                });
            }
        }
        changes
    }

    /// Pure intersection test between a document-space region and the
    /// margin-adjusted viewport at `offset`.
    ///
    /// Margins follow the rootMargin convention: positive values grow the
    /// effective viewport outward on that edge, negative values shrink it.
    /// Touching edges count as intersecting. A margin that shrinks the window
    /// past itself intersects nothing.
    pub fn is_intersecting(
        viewport: Viewport,
        region: Rect,
        margin: EdgeInsets,
        offset: f64,
    ) -> bool {
        let top = offset - margin.top;
        let bottom = offset + viewport.height + margin.bottom;
        let left = -margin.left;
        let right = viewport.width + margin.right;

        if bottom < top || right < left {
            return false;
        }

        region.y0 <= bottom && region.y1 >= top && region.x0 <= right && region.x1 >= left
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/tracker.rs"]
mod tests;
