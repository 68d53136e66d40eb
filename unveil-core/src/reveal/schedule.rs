use crate::animation::ease::Ease;
use crate::foundation::core::{TimeMs, Vec2};
use crate::foundation::error::{UnveilError, UnveilResult};

fn default_initial_delay_ms() -> u64 {
    80
}
fn default_stagger_interval_ms() -> u64 {
    80
}
fn default_block_duration_ms() -> u64 {
    450
}
fn default_block_offset() -> f64 {
    12.0
}
fn default_block_ease() -> Ease {
    Ease::InOutCubic
}
fn default_container_duration_ms() -> u64 {
    600
}
fn default_container_offset() -> f64 {
    18.0
}
fn default_container_ease() -> Ease {
    Ease::OutCubic
}

/// Timing and curve configuration for one section's reveal.
///
/// Every section carries its own copy; there is no shared timing state
/// between sections. Defaults are the house reveal: 80 ms initial delay,
/// 80 ms stagger, 450 ms block transition rising 12 units, 600 ms ease-out
/// container reveal rising 18 units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealTiming {
    /// Delay from the reveal instant to the first block's start.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Extra delay added per block index.
    #[serde(default = "default_stagger_interval_ms")]
    pub stagger_interval_ms: u64,
    /// Duration of each block's hidden-to-shown transition.
    #[serde(default = "default_block_duration_ms")]
    pub block_duration_ms: u64,
    /// Hidden-state downward translation of each block, logical units.
    #[serde(default = "default_block_offset")]
    pub block_offset: f64,
    /// Curve for block transitions.
    #[serde(default = "default_block_ease")]
    pub block_ease: Ease,
    /// Duration of the container's own reveal, starting at the reveal
    /// instant.
    #[serde(default = "default_container_duration_ms")]
    pub container_duration_ms: u64,
    /// Hidden-state downward translation of the container.
    #[serde(default = "default_container_offset")]
    pub container_offset: f64,
    /// Curve for the container reveal.
    #[serde(default = "default_container_ease")]
    pub container_ease: Ease,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            stagger_interval_ms: default_stagger_interval_ms(),
            block_duration_ms: default_block_duration_ms(),
            block_offset: default_block_offset(),
            block_ease: default_block_ease(),
            container_duration_ms: default_container_duration_ms(),
            container_offset: default_container_offset(),
            container_ease: default_container_ease(),
        }
    }
}

impl RevealTiming {
    /// Check numeric invariants.
    pub fn validate(&self) -> UnveilResult<()> {
        if !self.block_offset.is_finite() {
            return Err(UnveilError::validation(
                "RevealTiming block_offset must be finite",
            ));
        }
        if !self.container_offset.is_finite() {
            return Err(UnveilError::validation(
                "RevealTiming container_offset must be finite",
            ));
        }
        Ok(())
    }
}

/// Scheduled transition window of one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSlot {
    /// Transition start, relative to the reveal instant.
    pub start: TimeMs,
    /// Transition length in milliseconds.
    pub duration_ms: u64,
}

/// Visual state of a block or container between hidden and shown.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BlockVisual {
    /// 0 hidden, 1 fully shown.
    pub opacity: f64,
    /// Remaining hidden-state translation, zero when fully shown.
    pub translate: Vec2,
}

impl BlockVisual {
    fn hidden(offset: f64) -> Self {
        Self {
            opacity: 0.0,
            translate: Vec2::new(0.0, offset),
        }
    }
}

/// Per-block reveal schedule: a pure function of block index and the timing
/// constants.
///
/// Block `i` starts at `initial_delay + i * stagger_interval` after the
/// reveal instant and transitions for `block_duration`. Identity is the
/// structural index; the schedule never stores per-block state, so consulting
/// it is side-effect free at any instant.
#[derive(Clone, Copy, Debug)]
pub struct RevealSchedule {
    timing: RevealTiming,
    len: usize,
}

impl RevealSchedule {
    /// Schedule for `len` blocks under `timing`.
    pub fn new(timing: RevealTiming, len: usize) -> Self {
        Self { timing, len }
    }

    /// Number of scheduled blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no blocks are scheduled.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Transition window of block `index`, or None past the end.
    pub fn slot(&self, index: usize) -> Option<BlockSlot> {
        if index >= self.len {
            return None;
        }
        let start = self
            .timing
            .initial_delay_ms
            .saturating_add((index as u64).saturating_mul(self.timing.stagger_interval_ms));
        Some(BlockSlot {
            start: TimeMs(start),
            duration_ms: self.timing.block_duration_ms,
        })
    }

    /// Instant (relative to the reveal) when every block and the container
    /// have fully settled.
    pub fn settle_time(&self) -> TimeMs {
        let container = self.timing.container_duration_ms;
        let blocks = match self.len {
            0 => 0,
            n => self
                .timing
                .initial_delay_ms
                .saturating_add(((n - 1) as u64).saturating_mul(self.timing.stagger_interval_ms))
                .saturating_add(self.timing.block_duration_ms),
        };
        TimeMs(container.max(blocks))
    }

    /// Visual state of block `index` at `since` (time past the reveal
    /// instant; `None` while unrevealed). Out-of-range indices render hidden.
    pub fn block_visual(&self, index: usize, since: Option<TimeMs>) -> BlockVisual {
        let hidden = BlockVisual::hidden(self.timing.block_offset);
        let Some(slot) = self.slot(index) else {
            return hidden;
        };
        let Some(since) = since else {
            return hidden;
        };
        let p = eased_progress(slot.start, slot.duration_ms, self.timing.block_ease, since);
        BlockVisual {
            opacity: p,
            translate: Vec2::new(0.0, self.timing.block_offset * (1.0 - p)),
        }
    }

    /// Visual state of the section container at `since`; the container's
    /// transition starts at the reveal instant itself.
    pub fn container_visual(&self, since: Option<TimeMs>) -> BlockVisual {
        let Some(since) = since else {
            return BlockVisual::hidden(self.timing.container_offset);
        };
        let p = eased_progress(
            TimeMs(0),
            self.timing.container_duration_ms,
            self.timing.container_ease,
            since,
        );
        BlockVisual {
            opacity: p,
            translate: Vec2::new(0.0, self.timing.container_offset * (1.0 - p)),
        }
    }
}

/// Eased progress of a transition window at `since`: 0 before `start`, 1 from
/// `start + duration` on (immediately at `start` for zero durations).
fn eased_progress(start: TimeMs, duration_ms: u64, ease: Ease, since: TimeMs) -> f64 {
    if since.0 < start.0 {
        return 0.0;
    }
    if duration_ms == 0 {
        return 1.0;
    }
    let t = (since.0 - start.0) as f64 / duration_ms as f64;
    ease.apply(t.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/schedule.rs"]
mod tests;
