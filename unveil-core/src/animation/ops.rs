use crate::animation::anim::{Anim, Expr, InterpMode, Keyframe, Keyframes, LoopMode};
use crate::animation::ease::Ease;
use crate::foundation::core::TimeMs;

/// Shift `inner` later by `by_ms`; its start value holds until then.
pub fn delay<T>(inner: Anim<T>, by_ms: u64) -> Anim<T> {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by_ms,
    })
}

/// Repeat `inner` forever over `period_ms`.
pub fn loop_<T>(inner: Anim<T>, period_ms: u64, mode: LoopMode) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms,
        mode,
    })
}

/// Infinite keyframe cycle: `values` spread evenly across `period_ms`, each
/// segment eased by `ease`, repeated forever.
///
/// This is the workhorse of ambient motion. Author the cycle closed (last
/// value equal to the first) for a seamless wrap; an open cycle jumps at the
/// period boundary. An empty `values` slice produces an animation that fails
/// validation.
pub fn cycle<T: Clone>(values: &[T], period_ms: u64, ease: Ease) -> Anim<T> {
    let n = values.len();
    let keys = if n <= 1 {
        values
            .iter()
            .map(|v| Keyframe {
                at: TimeMs(0),
                value: v.clone(),
                ease,
            })
            .collect()
    } else {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Keyframe {
                at: TimeMs(i as u64 * period_ms / (n as u64 - 1)),
                value: v.clone(),
                ease,
            })
            .collect()
    };

    loop_(
        Anim::Keyframes(Keyframes {
            keys,
            mode: InterpMode::Linear,
            default: None,
        }),
        period_ms.max(1),
        LoopMode::Repeat,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
