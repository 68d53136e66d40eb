use super::*;

fn ctx(t_ms: u64) -> SampleCtx {
    SampleCtx::new(TimeMs(t_ms), 0)
}

fn ramp(end_ms: u64, end_value: f64) -> Anim<f64> {
    Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: TimeMs(0),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: TimeMs(end_ms),
                value: end_value,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    })
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let anim = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: TimeMs(0),
                value: 1.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: TimeMs(100),
                value: 3.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Hold,
        default: None,
    });
    assert_eq!(anim.sample(ctx(50)).unwrap(), 1.0);
    assert_eq!(anim.sample(ctx(100)).unwrap(), 3.0);
}

#[test]
fn keyframes_linear_interpolates_and_clamps_ends() {
    let anim = ramp(100, 10.0);
    assert_eq!(anim.sample(ctx(0)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(50)).unwrap(), 5.0);
    assert_eq!(anim.sample(ctx(100)).unwrap(), 10.0);
    assert_eq!(anim.sample(ctx(5000)).unwrap(), 10.0);
}

#[test]
fn keyframes_ease_applies_toward_next_key() {
    let anim = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: TimeMs(0),
                value: 0.0,
                ease: Ease::OutCubic,
            },
            Keyframe {
                at: TimeMs(100),
                value: 1.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    });
    let mid = anim.sample(ctx(50)).unwrap();
    assert!((mid - 0.875).abs() < 1e-12);
}

#[test]
fn expr_delay_holds_start_then_plays() {
    let anim = Anim::Expr(Expr::Delay {
        inner: Box::new(ramp(100, 10.0)),
        by_ms: 40,
    });
    assert_eq!(anim.sample(ctx(0)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(40)).unwrap(), 0.0);
    assert_eq!(anim.sample(ctx(90)).unwrap(), 5.0);
    assert_eq!(anim.sample(ctx(140)).unwrap(), 10.0);
}

#[test]
fn expr_loop_repeat_wraps_time() {
    let anim = Anim::Expr(Expr::Loop {
        inner: Box::new(ramp(100, 10.0)),
        period_ms: 100,
        mode: LoopMode::Repeat,
    });
    assert_eq!(anim.sample(ctx(30)).unwrap(), 3.0);
    assert_eq!(anim.sample(ctx(130)).unwrap(), 3.0);
    assert_eq!(anim.sample(ctx(1030)).unwrap(), 3.0);
}

#[test]
fn expr_loop_ping_pong_reflects() {
    let anim = Anim::Expr(Expr::Loop {
        inner: Box::new(ramp(100, 10.0)),
        period_ms: 101,
        mode: LoopMode::PingPong,
    });
    // Forward leg.
    assert_eq!(anim.sample(ctx(40)).unwrap(), 4.0);
    // Backward leg: cycle = 200, pos 160 reflects to local 40.
    assert_eq!(anim.sample(ctx(160)).unwrap(), 4.0);
    // Cycle boundary returns to the start value.
    assert_eq!(anim.sample(ctx(200)).unwrap(), 0.0);
}

#[test]
fn vec2_channels_interpolate_componentwise() {
    let anim: Anim<Vec2> = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: TimeMs(0),
                value: Vec2::new(0.0, 30.0),
                ease: Ease::Linear,
            },
            Keyframe {
                at: TimeMs(100),
                value: Vec2::new(10.0, -10.0),
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    });
    let v = anim.sample(ctx(50)).unwrap();
    assert_eq!(v, Vec2::new(5.0, 10.0));
}

#[test]
fn validate_rejects_unsorted_keys_and_zero_period() {
    let unsorted: Anim<f64> = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: TimeMs(100),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: TimeMs(0),
                value: 1.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    });
    assert!(unsorted.validate().is_err());

    let zero_period = Anim::Expr(Expr::Loop {
        inner: Box::new(Anim::constant(1.0)),
        period_ms: 0,
        mode: LoopMode::Repeat,
    });
    assert!(zero_period.validate().is_err());

    let empty: Anim<f64> = Anim::Keyframes(Keyframes {
        keys: vec![],
        mode: InterpMode::Linear,
        default: None,
    });
    assert!(empty.validate().is_err());
}

#[test]
fn constant_holds_forever() {
    let anim = Anim::constant(7.5);
    assert_eq!(anim.sample(ctx(0)).unwrap(), 7.5);
    assert_eq!(anim.sample(ctx(123_456)).unwrap(), 7.5);
}
