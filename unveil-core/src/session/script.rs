use crate::{
    eval::evaluator::PageFrame,
    foundation::core::{TimeMs, Viewport},
    foundation::error::{UnveilError, UnveilResult},
    page::model::Page,
    session::page_session::{PageSession, SessionOpts},
};

/// A deterministic scroll scenario replayed against a page.
///
/// Scripts describe the environment over time: when the document scrolled
/// where, how often to sample, and for how long. Replaying the same script
/// against the same page always yields the same frames.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollScript {
    /// Viewport for the run; `None` exercises the fail-open path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    /// Scroll events, sorted by time, non-decreasing.
    #[serde(default)]
    pub events: Vec<ScrollEvent>,
    /// Sampling cadence in milliseconds, > 0.
    #[serde(default = "default_sample_every_ms")]
    pub sample_every_ms: u64,
    /// Inclusive end of the run; the final frame lands exactly here.
    pub until_ms: u64,
}

/// One scroll offset change at a point in time.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollEvent {
    /// Event time.
    pub at_ms: u64,
    /// New scroll offset.
    pub offset: f64,
}

fn default_sample_every_ms() -> u64 {
    16
}

impl ScrollScript {
    /// Check cadence and event ordering.
    pub fn validate(&self) -> UnveilResult<()> {
        if self.sample_every_ms == 0 {
            return Err(UnveilError::validation(
                "ScrollScript sample_every_ms must be > 0",
            ));
        }
        if let Some(vp) = &self.viewport {
            // Deserialized viewports skip the constructor check.
            Viewport::new(vp.width, vp.height)?;
        }
        if !self.events.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(UnveilError::validation(
                "ScrollScript events must be sorted by time",
            ));
        }
        if let Some(ev) = self.events.iter().find(|ev| !ev.offset.is_finite()) {
            return Err(UnveilError::validation(format!(
                "ScrollScript event at {} ms has a non-finite offset",
                ev.at_ms
            )));
        }
        Ok(())
    }
}

/// Replay `script` against `page`, sampling on the cadence.
///
/// The page mounts at time zero with no scroll offset known; events apply at
/// their timestamp, before any frame sampled at the same instant.
pub fn replay(page: Page, script: &ScrollScript) -> UnveilResult<Vec<PageFrame>> {
    script.validate()?;
    let mut session = PageSession::new(
        page,
        SessionOpts {
            viewport: script.viewport,
            scroll: None,
            mounted_at: TimeMs(0),
        },
    )?;

    let mut frames = Vec::new();
    let mut next_event = 0;
    let mut t = 0u64;
    loop {
        while next_event < script.events.len() && script.events[next_event].at_ms <= t {
            let event = script.events[next_event];
            session.scroll_to(TimeMs(event.at_ms), event.offset);
            next_event += 1;
        }
        frames.push(session.sample(TimeMs(t))?);
        if t >= script.until_ms {
            break;
        }
        t = (t + script.sample_every_ms).min(script.until_ms);
    }
    Ok(frames)
}
