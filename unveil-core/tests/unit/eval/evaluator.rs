use super::*;
use crate::{
    animation::anim::Anim,
    animation::proc::{ProcScalar, Procedural, ProceduralKind},
    foundation::core::Rect,
    page::dsl::{LayerBuilder, PageBuilder, SectionBuilder, ShapeBuilder},
    scroll::map::ScrollMap,
};

fn basic_page() -> Page {
    let intro = SectionBuilder::new("intro", "Hi, I'm Maya", Rect::new(0.0, 0.0, 1200.0, 900.0))
        .subtitle("Creative developer")
        .block("lead")
        .block("links")
        .block("cards")
        .build()
        .unwrap();

    let sway = ShapeBuilder::new("sway")
        .rest(Transform2D {
            translate: Vec2::new(200.0, 100.0),
            rotation_rad: 0.5,
            ..Transform2D::default()
        })
        .translate(Anim::constant(Vec2::new(30.0, -18.0)))
        .scale(Anim::constant(1.25))
        .rotation(Anim::constant(0.25))
        .drift(
            ScrollMap::new([0.0, 900.0], [0.0, -120.0]).unwrap(),
            DriftAxis::Y,
        )
        .build()
        .unwrap();

    let orb = ShapeBuilder::new("orb")
        .rest(Transform2D {
            translate: Vec2::new(400.0, 300.0),
            ..Transform2D::default()
        })
        .drift(
            ScrollMap::new([0.0, 900.0], [0.0, 80.0]).unwrap(),
            DriftAxis::X,
        )
        .build()
        .unwrap();

    PageBuilder::new()
        .seed(11)
        .section(intro)
        .unwrap()
        .layer(
            LayerBuilder::new("backdrop")
                .shape(sway)
                .shape(orb)
                .build()
                .unwrap(),
        )
        .unwrap()
        .build()
        .unwrap()
}

fn env(now_ms: u64, scroll: Option<f64>) -> EnvSample {
    EnvSample {
        now: TimeMs(now_ms),
        scroll,
    }
}

#[test]
fn unobserved_section_renders_hidden() {
    let page = basic_page();
    let frame = eval_page(&page, &[RevealPhase::Unobserved], env(10_000, None)).unwrap();

    let section = &frame.sections[0];
    assert_eq!(section.container.opacity, 0.0);
    assert_eq!(section.container.translate, Vec2::new(0.0, 18.0));
    assert_eq!(section.blocks.len(), 3);
    for block in &section.blocks {
        assert_eq!(block.opacity, 0.0);
        assert_eq!(block.translate, Vec2::new(0.0, 12.0));
    }
}

#[test]
fn revealed_section_settles_fully_shown() {
    let page = basic_page();
    let phase = RevealPhase::Revealed { at: TimeMs(0) };
    let frame = eval_page(&page, &[phase], env(10_000, None)).unwrap();

    let section = &frame.sections[0];
    assert_eq!(section.container.opacity, 1.0);
    assert_eq!(section.container.translate, Vec2::ZERO);
    for block in &section.blocks {
        assert_eq!(block.opacity, 1.0);
        assert_eq!(block.translate, Vec2::ZERO);
    }
}

#[test]
fn blocks_progress_in_stagger_order_mid_reveal() {
    let page = basic_page();
    let phase = RevealPhase::Revealed { at: TimeMs(1000) };
    // 240 ms after the latch: block 0 is 160 ms in, block 1 is 80 ms in,
    // block 2 starts exactly now.
    let frame = eval_page(&page, &[phase], env(1240, None)).unwrap();

    let blocks = &frame.sections[0].blocks;
    assert!(blocks[0].opacity > blocks[1].opacity);
    assert!(blocks[1].opacity > blocks[2].opacity);
    assert_eq!(blocks[2].opacity, 0.0);
    assert!(blocks[0].opacity < 1.0);
    assert!(blocks[0].translate.y < blocks[1].translate.y);
    assert_eq!(blocks[2].translate.y, 12.0);
}

#[test]
fn phase_count_mismatch_is_rejected() {
    let page = basic_page();
    assert!(eval_page(&page, &[], env(0, None)).is_err());
}

#[test]
fn shapes_compose_rest_channels_and_drift() {
    let page = basic_page();
    let frame = eval_page(&page, &[RevealPhase::Unobserved], env(0, Some(450.0))).unwrap();

    let sway = &frame.layers[0].shapes[0];
    assert_eq!(sway.transform.translate, Vec2::new(230.0, 22.0));
    assert_eq!(sway.transform.scale, Vec2::new(1.25, 1.25));
    assert_eq!(sway.transform.rotation_rad, 0.75);

    let orb = &frame.layers[0].shapes[1];
    assert_eq!(orb.transform.translate, Vec2::new(440.0, 300.0));
}

#[test]
fn missing_scroll_zeroes_drift_but_keeps_channels() {
    let page = basic_page();
    let frame = eval_page(&page, &[RevealPhase::Unobserved], env(0, None)).unwrap();

    let sway = &frame.layers[0].shapes[0];
    assert_eq!(sway.transform.translate, Vec2::new(230.0, 82.0));
    let orb = &frame.layers[0].shapes[1];
    assert_eq!(orb.transform.translate, Vec2::new(400.0, 300.0));
}

#[test]
fn unsampleable_shape_falls_back_to_rest() {
    // A scalar procedural source bound to the Vec2 translation channel
    // cannot be sampled; the shape must render at rest instead of failing.
    let shape = AmbientShape {
        id: "bad".to_string(),
        rest: Transform2D {
            translate: Vec2::new(5.0, 6.0),
            ..Transform2D::default()
        },
        translate: Anim::Procedural(Procedural::new(ProceduralKind::Scalar(ProcScalar::Sine {
            amp: 1.0,
            freq_hz: 1.0,
            phase: 0.0,
            offset: 0.0,
        }))),
        scale: Anim::constant(1.0),
        rotation: Anim::constant(0.0),
        opacity: 0.8,
        drift: None,
    };
    let layer = AmbientLayer {
        id: "bg".to_string(),
        shapes: vec![shape],
    };

    let out = eval_layer(&layer, 0, env(500, None));
    assert_eq!(out.shapes[0].transform.translate, Vec2::new(5.0, 6.0));
    assert_eq!(out.shapes[0].opacity, 0.8);
}
