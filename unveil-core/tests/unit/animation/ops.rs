use super::*;
use crate::animation::anim::SampleCtx;

fn sample(anim: &Anim<f64>, t_ms: u64) -> f64 {
    anim.sample(SampleCtx::new(TimeMs(t_ms), 0)).unwrap()
}

#[test]
fn cycle_visits_values_in_order() {
    // Closed cycle over 300 ms: keys at 0, 100, 200, 300.
    let anim = cycle(&[0.0, 30.0, -10.0, 0.0], 300, Ease::Linear);
    assert_eq!(sample(&anim, 0), 0.0);
    assert_eq!(sample(&anim, 100), 30.0);
    assert_eq!(sample(&anim, 150), 10.0);
    assert_eq!(sample(&anim, 200), -10.0);
}

#[test]
fn cycle_wraps_seamlessly_when_closed() {
    let anim = cycle(&[5.0, 9.0, 5.0], 200, Ease::Linear);
    // Just before the boundary the value approaches the first value; at the
    // boundary the loop restarts exactly on it.
    let before = sample(&anim, 199);
    assert!((before - 5.0).abs() < 0.1);
    assert_eq!(sample(&anim, 200), 5.0);
    assert_eq!(sample(&anim, 1_000), 5.0);
}

#[test]
fn cycle_single_value_is_constant() {
    let anim = cycle(&[4.0], 10_000, Ease::InOutQuad);
    assert_eq!(sample(&anim, 0), 4.0);
    assert_eq!(sample(&anim, 123_456), 4.0);
}

#[test]
fn cycle_empty_fails_validation() {
    let anim: Anim<f64> = cycle(&[], 1_000, Ease::Linear);
    assert!(anim.validate().is_err());
}

#[test]
fn delayed_cycle_holds_then_plays_in_phase() {
    let base = cycle(&[0.0, 10.0, 0.0], 400, Ease::Linear);
    let shifted = delay(base.clone(), 150);
    assert_eq!(sample(&shifted, 0), 0.0);
    assert_eq!(sample(&shifted, 150), 0.0);
    // After the hold the shifted loop trails the base by exactly 150 ms.
    assert_eq!(sample(&shifted, 350), sample(&base, 200));
    assert_eq!(sample(&shifted, 950), sample(&base, 800));
}

#[test]
fn loop_ping_pong_round_trip() {
    let ramp = Anim::Keyframes(Keyframes {
        keys: vec![
            Keyframe {
                at: TimeMs(0),
                value: 0.0,
                ease: Ease::Linear,
            },
            Keyframe {
                at: TimeMs(100),
                value: 8.0,
                ease: Ease::Linear,
            },
        ],
        mode: InterpMode::Linear,
        default: None,
    });
    let pp = loop_(ramp, 101, LoopMode::PingPong);
    assert_eq!(sample(&pp, 50), 4.0);
    assert_eq!(sample(&pp, 150), 4.0);
}
