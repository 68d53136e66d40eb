use crate::foundation::error::{UnveilError, UnveilResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Timeline position in integer milliseconds since page mount.
///
/// All scheduling math (stagger offsets, transition durations, loop periods)
/// is integer millisecond arithmetic; fractional time never enters the model.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Elapsed time since `earlier`, saturating to zero when `earlier` is in
    /// the future (a non-monotonic clock must not underflow scheduling math).
    pub fn since(self, earlier: TimeMs) -> TimeMs {
        TimeMs(self.0.saturating_sub(earlier.0))
    }

    /// Position shifted later by `ms`, saturating at the numeric ceiling.
    pub fn plus(self, ms: u64) -> TimeMs {
        TimeMs(self.0.saturating_add(ms))
    }

    /// Position as fractional seconds, for oscillator phase math.
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

/// Visible area of the embedding surface, in logical units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Horizontal extent, > 0.
    pub width: f64,
    /// Vertical extent, > 0.
    pub height: f64,
}

impl Viewport {
    /// Build a validated viewport.
    pub fn new(width: f64, height: f64) -> UnveilResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(UnveilError::validation("Viewport width must be > 0"));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(UnveilError::validation("Viewport height must be > 0"));
        }
        Ok(Self { width, height })
    }
}

/// Asymmetric directional inset, in logical units.
///
/// Used as the intersection trigger margin: negative values shrink the
/// effective viewport on that edge, so a region must scroll further in before
/// it counts as intersecting; positive values grow it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Top edge adjustment.
    pub top: f64,
    /// Right edge adjustment.
    pub right: f64,
    /// Bottom edge adjustment.
    pub bottom: f64,
    /// Left edge adjustment.
    pub left: f64,
}

impl EdgeInsets {
    /// Zero inset on all edges.
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Same inset on all four edges.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// True when every edge value is finite.
    pub fn is_finite(self) -> bool {
        self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left.is_finite()
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Decomposed 2-D placement: translation, rotation, non-uniform scale around
/// an anchor point in local space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Offset in parent space.
    pub translate: Vec2,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Scale factors, default (1,1).
    pub scale: Vec2,
    /// Pivot in local space.
    pub anchor: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    /// Resolve to a single affine matrix.
    pub fn to_affine(self) -> kurbo::Affine {
        let t_translate = kurbo::Affine::translate(self.translate);
        let t_anchor = kurbo::Affine::translate(self.anchor);
        let t_unanchor = kurbo::Affine::translate(-self.anchor);
        let t_rotate = kurbo::Affine::rotate(self.rotation_rad);
        let t_scale = kurbo::Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // Canonical order:
        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}
