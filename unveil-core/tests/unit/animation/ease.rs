use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0, "{ease:?} below range");
        assert_eq!(ease.apply(7.5), 1.0, "{ease:?} above range");
    }
}

#[test]
fn curves_are_monotonic_non_decreasing() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(i as f64 / 100.0);
            assert!(v >= prev - 1e-12, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_cubic_decelerates() {
    // First half covers more ground than the second half.
    let half = Ease::OutCubic.apply(0.5);
    assert!(half > 0.5);
    assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn in_out_cubic_is_symmetric_around_midpoint() {
    for i in 0..=50 {
        let t = i as f64 / 100.0;
        let a = Ease::InOutCubic.apply(t);
        let b = Ease::InOutCubic.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-12, "asymmetric at t={t}");
    }
}
