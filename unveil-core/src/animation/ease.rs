/// Normalized easing curve applied to transition progress.
///
/// Reveal defaults: `OutCubic` for section containers (smooth deceleration),
/// `InOutCubic` for staggered child blocks. Ambient loops usually run on
/// `InOutQuad` to turn around softly at cycle extremes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic accelerate-in.
    InQuad,
    /// Quadratic decelerate-out.
    OutQuad,
    /// Quadratic in-out.
    InOutQuad,
    /// Cubic accelerate-in.
    InCubic,
    /// Cubic decelerate-out.
    OutCubic,
    /// Cubic in-out.
    InOutCubic,
}

impl Ease {
    /// Map progress `t` through the curve. Input is clamped to `[0, 1]`;
    /// output stays in `[0, 1]` with `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
