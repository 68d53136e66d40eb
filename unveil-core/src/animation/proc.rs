use crate::{
    animation::anim::SampleCtx,
    foundation::core::Vec2,
    foundation::error::{UnveilError, UnveilResult},
};

/// Procedural animation source: a closed-form function of time and seed.
///
/// Used for ambient motion that would be awkward as keyframes, like a slow
/// shimmer (`Sine`) or organic drift (`Noise1D`).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Procedural<T> {
    /// Concrete source and parameters.
    pub kind: ProceduralKind,
    #[serde(skip)]
    _marker: std::marker::PhantomData<T>,
}

impl<T> Procedural<T> {
    /// Wrap a procedural kind for channel type `T`.
    pub fn new(kind: ProceduralKind) -> Self {
        Self {
            kind,
            _marker: std::marker::PhantomData,
        }
    }
}

/// Channel types that can be produced by a procedural source.
pub trait ProcValue: Sized {
    /// Evaluate `kind` at `ctx` as this channel type.
    fn from_procedural(kind: &ProceduralKind, ctx: SampleCtx) -> UnveilResult<Self>;
}

impl<T> Procedural<T>
where
    T: ProcValue,
{
    /// Sample the source at `ctx.t`.
    pub fn sample(&self, ctx: SampleCtx) -> UnveilResult<T> {
        T::from_procedural(&self.kind, ctx)
    }
}

/// Shape of a procedural source.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum ProceduralKind {
    /// Single scalar channel.
    Scalar(ProcScalar),
    /// Two independent scalar channels forming a vector.
    Vec2 {
        /// Horizontal channel.
        x: ProcScalar,
        /// Vertical channel.
        y: ProcScalar,
    },
}

/// Scalar procedural sources.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ProcScalar {
    /// `offset + amp * sin(TAU * freq_hz * secs + phase)`.
    Sine {
        /// Peak deviation from `offset`.
        amp: f64,
        /// Oscillations per second.
        freq_hz: f64,
        /// Phase shift in radians.
        phase: f64,
        /// Center value.
        offset: f64,
    },
    /// Seeded 1-D value noise, linearly interpolated between lattice points.
    Noise1D {
        /// Peak deviation from `offset`.
        amp: f64,
        /// Lattice points per second.
        freq_hz: f64,
        /// Center value.
        offset: f64,
    },
}

/// Small deterministic generator (SplitMix64) for seeded noise.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

fn noise01(seed: u64, x: u64) -> f64 {
    let mut rng = Rng64::new(seed ^ x.wrapping_mul(0xD6E8_FEB8_6659_FD93));
    rng.next_f64_01()
}

fn sample_scalar(s: &ProcScalar, secs: f64, seed: u64) -> f64 {
    match *s {
        ProcScalar::Sine {
            amp,
            freq_hz,
            phase,
            offset,
        } => offset + amp * (std::f64::consts::TAU * freq_hz * secs + phase).sin(),
        ProcScalar::Noise1D {
            amp,
            freq_hz,
            offset,
        } => {
            let x = secs * freq_hz;
            let i0 = x.floor();
            let t = x - i0;
            let i0u = i0.max(0.0) as u64;
            let i1u = i0u + 1;

            let a = noise01(seed, i0u) * 2.0 - 1.0;
            let b = noise01(seed, i1u) * 2.0 - 1.0;
            let v = a + (b - a) * t;
            offset + amp * v
        }
    }
}

impl ProcValue for f64 {
    fn from_procedural(kind: &ProceduralKind, ctx: SampleCtx) -> UnveilResult<Self> {
        match kind {
            ProceduralKind::Scalar(s) => Ok(sample_scalar(s, ctx.t.as_secs_f64(), ctx.seed)),
            ProceduralKind::Vec2 { .. } => Err(UnveilError::animation(
                "procedural kind Vec2 cannot be sampled as f64",
            )),
        }
    }
}

impl ProcValue for Vec2 {
    fn from_procedural(kind: &ProceduralKind, ctx: SampleCtx) -> UnveilResult<Self> {
        match kind {
            ProceduralKind::Scalar(_) => Err(UnveilError::animation(
                "procedural kind Scalar cannot be sampled as Vec2",
            )),
            ProceduralKind::Vec2 { x, y } => {
                let secs = ctx.t.as_secs_f64();
                Ok(Vec2::new(
                    sample_scalar(x, secs, ctx.seed),
                    sample_scalar(y, secs, ctx.seed),
                ))
            }
        }
    }
}
