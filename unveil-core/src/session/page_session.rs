use crate::{
    eval::evaluator::{self, EnvSample, PageFrame},
    foundation::core::{TimeMs, Viewport},
    foundation::error::UnveilResult,
    observe::latch::{RevealPhase, VisibilityLatch},
    observe::tracker::{ViewportTracker, WatchId},
    page::model::Page,
};

/// Construction options for a [`PageSession`].
#[derive(Clone, Copy, Debug)]
pub struct SessionOpts {
    /// Viewport of the embedding surface. `None` means no intersection
    /// service is available; every section then reveals at mount (fail
    /// open), because content must never stay hidden for lack of a platform
    /// service.
    pub viewport: Option<Viewport>,
    /// Initial scroll offset; `None` means no scroll provider, which zeroes
    /// drift contributions until a [`PageSession::scroll_to`] arrives.
    pub scroll: Option<f64>,
    /// Page time at mount.
    pub mounted_at: TimeMs,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            viewport: None,
            scroll: None,
            mounted_at: TimeMs(0),
        }
    }
}

struct SectionEntry {
    watch: Option<WatchId>,
    latch: VisibilityLatch,
}

/// Stateful wiring of one mounted page.
///
/// Owns the page model, one visibility latch per section, and the viewport
/// tracker. Scroll events push in through [`PageSession::scroll_to`]; frames
/// pull out through [`PageSession::sample`]. Latches update before
/// `scroll_to` returns, so a sample taken at the same instant already sees
/// the new phases.
pub struct PageSession {
    page: Page,
    tracker: Option<ViewportTracker>,
    entries: Vec<SectionEntry>,
    scroll: Option<f64>,
}

impl PageSession {
    #[tracing::instrument(skip(page))]
    /// Validate `page` and mount it.
    ///
    /// Registers one watch per section and runs the mount-time intersection
    /// pass, so sections already in view resolve immediately. When no scroll
    /// offset is known yet the mount pass assumes offset zero.
    pub fn new(page: Page, opts: SessionOpts) -> UnveilResult<PageSession> {
        page.validate()?;

        let mut session = match opts.viewport {
            Some(viewport) => {
                let mut tracker = ViewportTracker::new(viewport);
                let entries = page
                    .sections
                    .iter()
                    .map(|section| SectionEntry {
                        watch: Some(tracker.watch(section.region, section.margin)),
                        latch: VisibilityLatch::new(),
                    })
                    .collect();
                PageSession {
                    page,
                    tracker: Some(tracker),
                    entries,
                    scroll: opts.scroll,
                }
            }
            None => {
                tracing::debug!("no viewport available, revealing every section at mount");
                let entries = page
                    .sections
                    .iter()
                    .map(|_| SectionEntry {
                        watch: None,
                        latch: VisibilityLatch::revealed_at(opts.mounted_at),
                    })
                    .collect();
                PageSession {
                    page,
                    tracker: None,
                    entries,
                    scroll: opts.scroll,
                }
            }
        };

        if session.scroll.is_none() {
            tracing::debug!("no scroll provider, drift contributions are disabled");
        }
        if session.tracker.is_some() {
            let offset = session.scroll.unwrap_or(0.0);
            session.dispatch(offset, opts.mounted_at);
        }
        Ok(session)
    }

    /// Feed a scroll event at `now`.
    ///
    /// Stores the offset and dispatches intersection transitions to the
    /// section latches before returning.
    pub fn scroll_to(&mut self, now: TimeMs, offset: f64) {
        self.scroll = Some(offset);
        self.dispatch(offset, now);
    }

    /// Tear down one section by id.
    ///
    /// Unregisters its watch and removes it from all subsequent frames; no
    /// further notification can reach it. Safe whether or not the section
    /// ever revealed. Returns `false` when no section has that id.
    pub fn remove_section(&mut self, id: &str) -> bool {
        let Some(index) = self.page.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        let entry = self.entries.remove(index);
        self.page.sections.remove(index);
        if let (Some(tracker), Some(watch)) = (self.tracker.as_mut(), entry.watch) {
            tracker.unwatch(watch);
        }
        true
    }

    /// Evaluate the page at `now` with the stored phases and scroll offset.
    ///
    /// Pure recompute: sampling never mutates session state.
    pub fn sample(&self, now: TimeMs) -> UnveilResult<PageFrame> {
        let phases: Vec<RevealPhase> = self.entries.iter().map(|e| e.latch.phase()).collect();
        evaluator::eval_page_unchecked(
            &self.page,
            &phases,
            EnvSample {
                now,
                scroll: self.scroll,
            },
        )
    }

    /// The mounted page model.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Reveal phase of the section with `id`, if it is still mounted.
    pub fn phase(&self, id: &str) -> Option<RevealPhase> {
        let index = self.page.sections.iter().position(|s| s.id == id)?;
        Some(self.entries[index].latch.phase())
    }

    /// Last scroll offset the session has seen, if any.
    pub fn scroll(&self) -> Option<f64> {
        self.scroll
    }

    fn dispatch(&mut self, offset: f64, now: TimeMs) {
        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };
        for change in tracker.observe_scroll(offset) {
            let Some(index) = self
                .entries
                .iter()
                .position(|e| e.watch == Some(change.watch))
            else {
                continue;
            };
            if self.entries[index].latch.observe(change.intersecting, now) {
                tracing::debug!(
                    section = %self.page.sections[index].id,
                    at_ms = now.0,
                    "section revealed"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/page_session.rs"]
mod tests;
