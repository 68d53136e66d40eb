//! # Unveil guide (v0.2.0)
//!
//! This module is a standalone, end-to-end walkthrough of Unveil's architecture and public API.
//! It is intentionally detailed so future phases (and external integrations) can build on a shared
//! mental model of what "a frame" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//! If you are implementing new features, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Page`](crate::Page): the document (sections + ambient layers) and the global seed
//! - [`Section`](crate::Section): a card-style content region revealed when scrolled into view
//! - [`ContentBlock`](crate::ContentBlock): an opaque, stably ordered unit inside a section
//! - [`ViewportTracker`](crate::ViewportTracker): intersection service over a margined viewport
//! - [`VisibilityLatch`](crate::VisibilityLatch) / [`RevealPhase`](crate::RevealPhase): the trigger-once reveal state machine
//! - [`RevealSchedule`](crate::RevealSchedule): per-block stagger timing derived from [`RevealTiming`](crate::RevealTiming)
//! - [`ScrollMap`](crate::ScrollMap): clamped two-point map from scroll offset to an output scalar
//! - [`PageFrame`](crate::PageFrame): the serializable visual snapshot of one sampled instant
//! - [`PageSession`](crate::PageSession): the stateful wiring of one mounted page
//!
//! The evaluation flow is explicitly staged:
//!
//! 1. Observe: [`ViewportTracker::observe_scroll`](crate::ViewportTracker::observe_scroll) reports intersection transitions
//! 2. Latch: [`VisibilityLatch::observe`](crate::VisibilityLatch::observe) fires exactly once per section
//! 3. Evaluate: [`eval_page`](crate::eval_page) maps page + phases + environment into a [`PageFrame`](crate::PageFrame)
//!
//! [`PageSession`](crate::PageSession) packages steps (1)-(3) behind two calls:
//! [`scroll_to`](crate::PageSession::scroll_to) (the push edge) and
//! [`sample`](crate::PageSession::sample) (the pull edge).
//!
//! ---
//!
//! ## "Time is an input" (and why)
//!
//! Unveil wants every visual value to be reproducible, testable, and portable. To do that, the
//! engine owns no clock and schedules no timers. Instead:
//!
//! - every API that depends on time takes a [`TimeMs`](crate::TimeMs) argument
//! - reveal instants are recorded as data ([`RevealPhase::Revealed`](crate::RevealPhase))
//! - procedural motion is seeded per shape from the page seed, so the same page at the same
//!   instant always produces the same frame
//!
//! This is what makes [`replay`](crate::replay) possible: a [`ScrollScript`](crate::ScrollScript)
//! fully describes the environment over time, and two replays of the same page and script are
//! identical, byte for byte, once serialized.
//!
//! ---
//!
//! ## Fail open (the degradation contract)
//!
//! A missing platform service may degrade motion but must never hide content:
//!
//! - no viewport available: every section latches `Revealed` at mount
//! - no scroll provider: drift contributions are zero; base loops keep running
//! - a shape channel that cannot be sampled: the shape renders static at its rest placement
//!
//! Construction-time problems are real errors ([`UnveilError`](crate::UnveilError)): malformed
//! models, duplicate ids, decreasing map ranges, unsorted keyframes. Validation happens in
//! builders and at [`PageSession::new`](crate::PageSession::new), so the per-frame surface stays
//! infallible by policy.
//!
//! ---
//!
//! ## Building a page (Rust DSL)
//!
//! JSON is supported via Serde ([`Page::from_json_str`](crate::Page::from_json_str)), but the JSON
//! representation is necessarily verbose because shape channels are animated values
//! ([`Anim<T>`](crate::Anim)). For programmatic usage, prefer the builder DSL.
//!
//! The following example builds a one-section page over a glowing backdrop, mounts it, and
//! samples the frame at which every block has settled.
//!
//! ```rust
//! use unveil::{
//!     DriftAxis, Ease, LayerBuilder, PageBuilder, PageSession, Rect, ScrollMap, SectionBuilder,
//!     SessionOpts, ShapeBuilder, TimeMs, Transform2D, Vec2, Viewport, cycle,
//! };
//!
//! # fn main() -> unveil::UnveilResult<()> {
//! let hero = SectionBuilder::new("hero", "Hi, I'm Maya", Rect::new(0.0, 0.0, 1200.0, 800.0))
//!     .subtitle("Creative developer")
//!     .badge("sparkles")
//!     .block("lead")
//!     .block("links")
//!     .block("cards")
//!     .build()?;
//!
//! let glow = ShapeBuilder::new("glow")
//!     .rest(Transform2D {
//!         translate: Vec2::new(220.0, 160.0),
//!         ..Transform2D::default()
//!     })
//!     .translate(cycle(
//!         &[
//!             Vec2::ZERO,
//!             Vec2::new(30.0, -18.0),
//!             Vec2::new(-10.0, 6.0),
//!             Vec2::ZERO,
//!         ],
//!         10_000,
//!         Ease::InOutQuad,
//!     ))
//!     .opacity(0.55)
//!     .drift(ScrollMap::new([0.0, 900.0], [0.0, -120.0])?, DriftAxis::Y)
//!     .build()?;
//!
//! let page = PageBuilder::new()
//!     .seed(7)
//!     .section(hero)?
//!     .layer(LayerBuilder::new("backdrop").shape(glow).build()?)?
//!     .build()?;
//!
//! let session = PageSession::new(
//!     page,
//!     SessionOpts {
//!         viewport: Some(Viewport::new(1440.0, 900.0)?),
//!         scroll: Some(0.0),
//!         mounted_at: TimeMs(0),
//!     },
//! )?;
//!
//! // The hero starts inside the viewport, so it latched at mount. Blocks
//! // start at 80/160/240 ms and each runs 450 ms; by 690 ms all are shown.
//! let frame = session.sample(TimeMs(690))?;
//! let hero = &frame.sections[0];
//! assert_eq!(hero.container.opacity, 1.0);
//! assert!(hero.blocks.iter().all(|b| b.opacity == 1.0));
//! assert_eq!(frame.layers[0].shapes[0].opacity, 0.55);
//! # Ok(())
//! # }
//! ```
//!
//! Notes:
//!
//! - [`Page::validate`](crate::Page::validate) is called by the builder.
//! - [`Anim::constant`](crate::Anim::constant) covers channels that should not move;
//!   [`cycle`](crate::cycle) spreads a value list evenly over a repeating period, the common
//!   idiom for ambient sway.
//!
//! ---
//!
//! ## Observation: the margined viewport
//!
//! Each section watches its own document-space rectangle against the viewport adjusted by the
//! section's [`EdgeInsets`](crate::EdgeInsets) trigger margin:
//!
//! - positive insets grow the effective window; negative insets shrink it (the default, -80 on
//!   every edge, makes a section reveal only after it is genuinely on screen)
//! - touching edges count as intersecting
//! - a margin that inverts the window intersects nothing
//!
//! [`ViewportTracker::observe_scroll`](crate::ViewportTracker::observe_scroll) reports
//! transitions only, except that the first evaluation of a watch always reports. That is what
//! resolves sections already in view at mount without a synthetic scroll event.
//! [`ViewportTracker::unwatch`](crate::ViewportTracker::unwatch) is teardown: after it returns,
//! no change for that id is ever reported again.
//!
//! ---
//!
//! ## The reveal schedule
//!
//! Once a section's latch fires, its visuals are a pure function of time since the reveal:
//!
//! - block `i` starts at `initial_delay + i * stagger_interval` and transitions for
//!   `block_duration`, rising from `block_offset` units below while fading in
//! - the container runs its own ease-out reveal from the latch instant
//! - [`RevealSchedule::settle_time`](crate::RevealSchedule::settle_time) is the instant
//!   everything is fully shown
//!
//! Identity is the structural index: blocks inserted or removed after the reveal do not replay.
//! A section whose content must change length is torn down
//! ([`PageSession::remove_section`](crate::PageSession::remove_section)) and remounted as a new
//! section, which re-triggers by design.
//!
//! ---
//!
//! ## Ambient motion
//!
//! Ambient layers are purely decorative and independent of every section's reveal state. Shape
//! channels are [`Anim<T>`](crate::Anim) values:
//!
//! - [`Keyframes`](crate::Keyframes): sorted, eased, hold or linear interpolation
//! - [`Procedural`](crate::Procedural): sine oscillator and seeded 1-D value noise
//! - wrapper expressions [`delay`](crate::delay) and [`loop_`](crate::loop_)
//!   ([`LoopMode::Repeat`](crate::LoopMode) restarts, `PingPong` reflects)
//!
//! A [`DriftBinding`](crate::DriftBinding) adds a scroll-mapped offset on one axis, which is how
//! parallax is expressed: the map reads the same offset every other map reads, with no shared
//! mutable state.
//!
//! ---
//!
//! ## Sessions and scripts
//!
//! [`PageSession`](crate::PageSession) is the only stateful type in the crate. It stores the
//! latches, the watch registrations, and the last scroll offset; everything else is recomputed
//! per sample. For offline runs, [`replay`](crate::replay) drives a session from a
//! [`ScrollScript`](crate::ScrollScript) and collects one [`PageFrame`](crate::PageFrame) per
//! cadence tick. The `unveil` binary wraps exactly that: `unveil sample` for one instant,
//! `unveil timeline` for a scripted run emitting JSON frames.
