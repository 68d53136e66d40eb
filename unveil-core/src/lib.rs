//! Unveil is a deterministic scroll-page motion engine.
//!
//! Unveil v0.2 models a vertically scrolling page (card-style content
//! sections over looping decorative background layers) and computes, purely
//! and frame by frame, the visual state of every element from two
//! environmental inputs: elapsed time and the document scroll offset.
//!
//! # Engine overview
//!
//! 1. **Observe**: `ViewportTracker + scroll offset -> IntersectionChange` (which sections entered the margined viewport)
//! 2. **Latch**: `VisibilityLatch` turns a section's first intersection into a permanent `RevealPhase::Revealed`
//! 3. **Schedule**: `RevealSchedule` staggers the section's blocks from the reveal instant
//! 4. **Evaluate**: `Page + phases + EnvSample -> PageFrame` (plain serializable visuals a renderer consumes)
//!
//! The key design constraints in v0.2:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation is pure and stable for a given page, phases, and environment.
//! - **Fail open**: a missing platform service (viewport, scroll) never hides content; sections reveal at mount and drift degrades to zero.
//! - **Time is an input**: the engine owns no clock and no timers; embedders pass [`TimeMs`].
//!
//! # Getting started
//!
//! - For end-user usage, see the repository README.
//! - For a detailed, standalone walkthrough of the API and architecture, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod observe;
mod page;
mod reveal;
mod scroll;
mod session;

/// High-level, standalone documentation for Unveil's concepts and architecture.
pub mod guide;

pub use animation::anim::{Anim, Expr, InterpMode, Keyframe, Keyframes, Lerp, LoopMode, SampleCtx};
pub use animation::ease::Ease;
pub use animation::ops::{cycle, delay, loop_};
pub use animation::proc::{ProcScalar, ProcValue, Procedural, ProceduralKind};
pub use eval::evaluator::{
    EnvSample, LayerFrame, PageFrame, SectionFrame, ShapeVisual, eval_layer, eval_page,
    eval_section,
};
pub use foundation::core::{Affine, EdgeInsets, Point, Rect, TimeMs, Transform2D, Vec2, Viewport};
pub use foundation::error::{UnveilError, UnveilResult};
pub use observe::latch::{RevealPhase, VisibilityLatch};
pub use observe::tracker::{IntersectionChange, ViewportTracker, WatchId};
pub use page::dsl::{LayerBuilder, PageBuilder, SectionBuilder, ShapeBuilder};
pub use page::model::{
    AmbientLayer, AmbientShape, ContentBlock, DriftAxis, DriftBinding, Page, Section,
};
pub use reveal::schedule::{BlockSlot, BlockVisual, RevealSchedule, RevealTiming};
pub use scroll::map::ScrollMap;
pub use session::page_session::{PageSession, SessionOpts};
pub use session::script::{ScrollEvent, ScrollScript, replay};
