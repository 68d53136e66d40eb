use crate::{
    animation::anim::SampleCtx,
    foundation::core::{TimeMs, Transform2D, Vec2},
    foundation::error::{UnveilError, UnveilResult},
    observe::latch::RevealPhase,
    page::model::{AmbientLayer, AmbientShape, DriftAxis, Page, Section},
    reveal::schedule::{BlockVisual, RevealSchedule},
};

/// Environmental inputs for one evaluated instant.
#[derive(Clone, Copy, Debug)]
pub struct EnvSample {
    /// Page time.
    pub now: TimeMs,
    /// Document scroll offset; `None` when no provider is available.
    pub scroll: Option<f64>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Fully evaluated page snapshot at one instant.
pub struct PageFrame {
    /// Evaluated page time.
    pub at: TimeMs,
    /// Scroll offset the frame was evaluated with, if any.
    pub scroll: Option<f64>,
    /// Evaluated sections, in page order.
    pub sections: Vec<SectionFrame>,
    /// Evaluated ambient layers, in page order.
    pub layers: Vec<LayerFrame>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Evaluated visual state of one section.
pub struct SectionFrame {
    /// Section identifier.
    pub id: String,
    /// Reveal phase the section was evaluated in.
    pub phase: RevealPhase,
    /// Container card visual.
    pub container: BlockVisual,
    /// Per-block visuals, in block order.
    pub blocks: Vec<BlockVisual>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Evaluated visual state of one ambient layer.
pub struct LayerFrame {
    /// Layer identifier.
    pub id: String,
    /// Per-shape visuals, back to front.
    pub shapes: Vec<ShapeVisual>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Evaluated placement of one ambient shape.
pub struct ShapeVisual {
    /// Shape identifier.
    pub id: String,
    /// Composed placement: rest, sampled channels, then drift.
    pub transform: Transform2D,
    /// Static opacity carried through from the model.
    pub opacity: f64,
}

#[tracing::instrument(skip(page, phases))]
/// Evaluate the whole page at one instant.
///
/// `phases` carries one reveal phase per section, in page order; the stateful
/// pairing of phases to sections lives in [`crate::PageSession`]. Pure:
/// calling this any number of times with the same inputs yields the same
/// frame.
pub fn eval_page(page: &Page, phases: &[RevealPhase], env: EnvSample) -> UnveilResult<PageFrame> {
    page.validate()?;
    eval_page_unchecked(page, phases, env)
}

pub(crate) fn eval_page_unchecked(
    page: &Page,
    phases: &[RevealPhase],
    env: EnvSample,
) -> UnveilResult<PageFrame> {
    if phases.len() != page.sections.len() {
        return Err(UnveilError::evaluation(format!(
            "phase count {} does not match section count {}",
            phases.len(),
            page.sections.len()
        )));
    }

    let sections = page
        .sections
        .iter()
        .zip(phases)
        .map(|(section, phase)| eval_section(section, *phase, env.now))
        .collect();
    let layers = page
        .layers
        .iter()
        .map(|layer| eval_layer(layer, page.seed, env))
        .collect();

    Ok(PageFrame {
        at: env.now,
        scroll: env.scroll,
        sections,
        layers,
    })
}

/// Evaluate one section's container and block visuals.
///
/// While the phase is [`RevealPhase::Unobserved`] everything renders hidden,
/// statically. Once revealed, visuals follow the section's reveal schedule
/// against time elapsed since the latch fired.
pub fn eval_section(section: &Section, phase: RevealPhase, now: TimeMs) -> SectionFrame {
    let schedule = RevealSchedule::new(section.timing, section.blocks.len());
    let since = phase.revealed_at().map(|at| now.since(at));
    SectionFrame {
        id: section.id.clone(),
        phase,
        container: schedule.container_visual(since),
        blocks: (0..section.blocks.len())
            .map(|i| schedule.block_visual(i, since))
            .collect(),
    }
}

/// Evaluate one ambient layer.
///
/// Ambient motion has no failure modes at this level: a shape whose channels
/// cannot be sampled renders static at its rest placement, and a missing
/// scroll offset zeroes the drift contribution while the base loop keeps
/// running.
pub fn eval_layer(layer: &AmbientLayer, page_seed: u64, env: EnvSample) -> LayerFrame {
    LayerFrame {
        id: layer.id.clone(),
        shapes: layer
            .shapes
            .iter()
            .map(|shape| eval_shape(shape, page_seed, env))
            .collect(),
    }
}

fn eval_shape(shape: &AmbientShape, page_seed: u64, env: EnvSample) -> ShapeVisual {
    let ctx = SampleCtx::new(env.now, stable_hash64(page_seed, &shape.id));
    let transform = match sample_shape_transform(shape, ctx) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(shape = %shape.id, error = %e, "channel sample failed, rendering at rest");
            shape.rest
        }
    };
    ShapeVisual {
        id: shape.id.clone(),
        transform: apply_drift(transform, shape, env.scroll),
        opacity: shape.opacity,
    }
}

fn sample_shape_transform(shape: &AmbientShape, ctx: SampleCtx) -> UnveilResult<Transform2D> {
    let translate = shape.translate.sample(ctx)?;
    let scale = shape.scale.sample(ctx)?;
    let rotation = shape.rotation.sample(ctx)?;
    Ok(Transform2D {
        translate: shape.rest.translate + translate,
        rotation_rad: shape.rest.rotation_rad + rotation,
        scale: Vec2::new(shape.rest.scale.x * scale, shape.rest.scale.y * scale),
        anchor: shape.rest.anchor,
    })
}

fn apply_drift(
    mut transform: Transform2D,
    shape: &AmbientShape,
    scroll: Option<f64>,
) -> Transform2D {
    let (Some(binding), Some(offset)) = (&shape.drift, scroll) else {
        return transform;
    };
    let drift = binding.map.map(offset);
    match binding.axis {
        DriftAxis::X => transform.translate.x += drift,
        DriftAxis::Y => transform.translate.y += drift,
    }
    transform
}

fn stable_hash64(seed: u64, s: &str) -> u64 {
    // FNV-1a 64, seeded.
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for &b in s.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
