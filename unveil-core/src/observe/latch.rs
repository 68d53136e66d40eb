use crate::foundation::core::TimeMs;

/// Reveal lifecycle of one section.
///
/// An explicit two-state machine with a single legal transition,
/// `Unobserved -> Revealed`. `Revealed` is terminal: later notifications,
/// including loss of intersection, never move the state back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RevealPhase {
    /// The section has not yet intersected the margined viewport.
    Unobserved,
    /// The section intersected at least once.
    Revealed {
        /// Instant the latch fired; stagger schedules are relative to this.
        at: TimeMs,
    },
}

impl RevealPhase {
    /// True once the latch has fired.
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed { .. })
    }

    /// Instant the latch fired, if it has.
    pub fn revealed_at(self) -> Option<TimeMs> {
        match self {
            Self::Unobserved => None,
            Self::Revealed { at } => Some(at),
        }
    }
}

/// Trigger-once visibility latch over [`RevealPhase`].
///
/// The guard lives here: however many intersection notifications arrive, the
/// transition body runs at most once, so downstream consumers can treat the
/// reveal instant as immutable.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityLatch {
    phase: RevealPhase,
}

impl VisibilityLatch {
    /// Latch in the `Unobserved` state.
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Unobserved,
        }
    }

    /// Latch born already revealed.
    ///
    /// The fail-open path: when no intersection service exists, sections are
    /// revealed at mount rather than hidden forever.
    pub fn revealed_at(at: TimeMs) -> Self {
        Self {
            phase: RevealPhase::Revealed { at },
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Feed one intersection notification.
    ///
    /// Returns true exactly once, on the `Unobserved -> Revealed` transition.
    /// A non-intersecting notification never changes state.
    pub fn observe(&mut self, intersecting: bool, now: TimeMs) -> bool {
        if intersecting && !self.phase.is_revealed() {
            self.phase = RevealPhase::Revealed { at: now };
            return true;
        }
        false
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new()
    }
}
