use crate::{
    animation::ease::Ease,
    animation::proc::{ProcValue, Procedural},
    foundation::core::{TimeMs, Vec2},
    foundation::error::{UnveilError, UnveilResult},
};

/// Inputs for sampling an animated value at one instant.
#[derive(Clone, Copy, Debug)]
pub struct SampleCtx {
    /// Local timeline position of the animated element. Wrapper expressions
    /// remap this before sampling their inner animation.
    pub t: TimeMs,
    /// Deterministic seed for procedural sources.
    pub seed: u64,
}

impl SampleCtx {
    /// Context at local time `t` with the given seed.
    pub fn new(t: TimeMs, seed: u64) -> Self {
        Self { t, seed }
    }

    fn at(mut self, t: TimeMs) -> Self {
        self.t = t;
        self
    }
}

/// Linear interpolation between two values of a channel type.
pub trait Lerp: Sized {
    /// Value at fraction `t` of the way from `a` to `b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// An animated value: a function of local time, deterministic given a seed.
///
/// Ambient shape channels (translation sway, scale breathing, slow rotation)
/// are `Anim` values, usually keyframe cycles wrapped in [`Expr::Loop`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    /// Sorted, eased keyframe track.
    Keyframes(Keyframes<T>),
    /// Procedural source (oscillator, value noise).
    Procedural(Procedural<T>),
    /// Wrapper expression over another animation.
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone + ProcValue,
{
    /// Animation holding `value` forever.
    pub fn constant(value: T) -> Self {
        Self::Keyframes(Keyframes {
            keys: vec![Keyframe {
                at: TimeMs(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        })
    }

    /// Sample the value at `ctx.t`.
    pub fn sample(&self, ctx: SampleCtx) -> UnveilResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(ctx),
            Self::Procedural(proc) => proc.sample(ctx),
            Self::Expr(expr) => expr.sample(ctx),
        }
    }

    /// Check structural invariants without sampling.
    pub fn validate(&self) -> UnveilResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Procedural(_proc) => Ok(()),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

/// Keyframe track sampled by binary search over key times.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    /// Keys sorted by time, non-decreasing.
    pub keys: Vec<Keyframe<T>>,
    /// Interpolation between adjacent keys.
    pub mode: InterpMode,
    /// Value when no keys exist.
    pub default: Option<T>,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Check key ordering and non-emptiness.
    pub fn validate(&self) -> UnveilResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(UnveilError::animation(
                "Keyframes must have at least one key or a default value",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at.0 <= w[1].at.0) {
            return Err(UnveilError::animation(
                "Keyframes keys must be sorted by time",
            ));
        }
        Ok(())
    }

    /// Sample at `ctx.t`: clamp before the first and after the last key,
    /// interpolate (per `mode`, eased by the left key's curve) between keys.
    pub fn sample(&self, ctx: SampleCtx) -> UnveilResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| UnveilError::animation("Keyframes has no keys and no default"));
        }

        let t = ctx.t.0;
        let idx = self.keys.partition_point(|k| k.at.0 <= t);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at.0.saturating_sub(a.at.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let f = ((t - a.at.0) as f64) / (denom as f64);
        let fe = a.ease.apply(f);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, fe)),
        }
    }
}

/// One key of a [`Keyframes`] track.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Key position on the local timeline.
    pub at: TimeMs,
    /// Value at that position.
    pub value: T,
    /// Ease applied toward the next key.
    pub ease: Ease,
}

/// Interpolation between adjacent keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    /// Hold the left key's value until the next key.
    Hold,
    /// Interpolate toward the next key.
    Linear,
}

/// Wrapper expressions remapping local time before sampling an inner
/// animation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Expr<T> {
    /// Shift the inner animation later; before `by_ms` the inner start value
    /// holds.
    Delay {
        /// Wrapped animation.
        inner: Box<Anim<T>>,
        /// Shift in milliseconds.
        by_ms: u64,
    },
    /// Repeat the inner animation forever over a fixed period.
    Loop {
        /// Wrapped animation.
        inner: Box<Anim<T>>,
        /// Cycle length in milliseconds, > 0.
        period_ms: u64,
        /// Restart or reflect at each cycle boundary.
        mode: LoopMode,
    },
}

/// How a [`Expr::Loop`] treats cycle boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    /// Jump back to the cycle start.
    Repeat,
    /// Play forward then backward, reflecting at both ends.
    PingPong,
}

impl<T> Expr<T>
where
    T: Lerp + Clone + ProcValue,
{
    /// Check wrapper parameters and the wrapped animation.
    pub fn validate(&self) -> UnveilResult<()> {
        match self {
            Self::Delay { inner, by_ms: _ } => inner.validate(),
            Self::Loop {
                inner,
                period_ms,
                mode: _,
            } => {
                if *period_ms == 0 {
                    return Err(UnveilError::animation("Loop period must be > 0"));
                }
                inner.validate()
            }
        }
    }

    /// Sample with the remapped local time.
    pub fn sample(&self, ctx: SampleCtx) -> UnveilResult<T> {
        match self {
            Self::Delay { inner, by_ms } => {
                let t = ctx.t.0;
                let mapped = TimeMs(if t < *by_ms { 0 } else { t - by_ms });
                inner.sample(ctx.at(mapped))
            }
            Self::Loop {
                inner,
                period_ms,
                mode,
            } => {
                if *period_ms == 0 {
                    return Err(UnveilError::animation("Loop period must be > 0"));
                }
                let t = ctx.t.0;
                let mapped = match mode {
                    LoopMode::Repeat => TimeMs(t % period_ms),
                    LoopMode::PingPong => {
                        if *period_ms == 1 {
                            TimeMs(0)
                        } else {
                            let cycle = 2 * (period_ms - 1);
                            let pos = t % cycle;
                            if pos < *period_ms {
                                TimeMs(pos)
                            } else {
                                TimeMs(cycle - pos)
                            }
                        }
                    }
                };
                inner.sample(ctx.at(mapped))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
