use super::*;

fn basic_page() -> Page {
    Page {
        sections: vec![
            Section {
                id: "about".to_string(),
                heading: "About Me".to_string(),
                subtitle: Some("Open source work and experiments".to_string()),
                badge: Some("sparkles".to_string()),
                region: Rect::new(0.0, 640.0, 1200.0, 1080.0),
                margin: EdgeInsets::uniform(-80.0),
                timing: RevealTiming::default(),
                blocks: vec![
                    ContentBlock {
                        id: "p0".to_string(),
                    },
                    ContentBlock {
                        id: "p1".to_string(),
                    },
                    ContentBlock {
                        id: "p2".to_string(),
                    },
                ],
            },
            Section {
                id: "projects".to_string(),
                heading: "Projects".to_string(),
                subtitle: None,
                badge: None,
                region: Rect::new(0.0, 1160.0, 1200.0, 1720.0),
                margin: EdgeInsets::uniform(-80.0),
                timing: RevealTiming::default(),
                blocks: vec![],
            },
        ],
        layers: vec![AmbientLayer {
            id: "backdrop".to_string(),
            shapes: vec![AmbientShape {
                id: "glow".to_string(),
                rest: Transform2D {
                    translate: Vec2::new(200.0, 120.0),
                    ..Transform2D::default()
                },
                translate: default_translate_channel(),
                scale: default_scale_channel(),
                rotation: default_rotation_channel(),
                opacity: 0.6,
                drift: Some(DriftBinding {
                    map: ScrollMap::new([0.0, 900.0], [0.0, -120.0]).unwrap(),
                    axis: DriftAxis::Y,
                }),
            }],
        }],
        seed: 7,
    }
}

#[test]
fn json_roundtrip() {
    let page = basic_page();
    page.validate().unwrap();
    let s = page.to_json_string().unwrap();
    let de = Page::from_json_str(&s).unwrap();
    assert_eq!(de.sections.len(), 2);
    assert_eq!(de.sections[0].blocks.len(), 3);
    assert_eq!(de.layers[0].shapes[0].opacity, 0.6);
    assert_eq!(de.seed, 7);
}

#[test]
fn validate_rejects_duplicate_section_id() {
    let mut page = basic_page();
    let dup = page.sections[0].clone();
    page.sections.push(dup);
    assert!(page.validate().is_err());
}

#[test]
fn validate_rejects_empty_heading() {
    let mut page = basic_page();
    page.sections[1].heading = "  ".to_string();
    assert!(page.validate().is_err());
}

#[test]
fn validate_rejects_duplicate_block_id() {
    let mut page = basic_page();
    page.sections[0].blocks.push(ContentBlock {
        id: "p1".to_string(),
    });
    assert!(page.validate().is_err());
}

#[test]
fn validate_rejects_inverted_region() {
    let mut page = basic_page();
    page.sections[0].region = Rect::new(1200.0, 640.0, 0.0, 1080.0);
    assert!(page.validate().is_err());
}

#[test]
fn validate_rejects_out_of_range_shape_opacity() {
    let mut page = basic_page();
    page.layers[0].shapes[0].opacity = 1.5;
    assert!(page.validate().is_err());
}

#[test]
fn validate_rejects_decreasing_drift_input() {
    let mut page = basic_page();
    page.layers[0].shapes[0].drift = Some(DriftBinding {
        map: ScrollMap {
            input: [900.0, 0.0],
            output: [0.0, 1.0],
        },
        axis: DriftAxis::X,
    });
    assert!(page.validate().is_err());
}

#[test]
fn serde_defaults_fill_margin_timing_and_channels() {
    let json = r#"{
        "sections": [
            {
                "id": "s0",
                "heading": "Skills",
                "region": {"x0": 0.0, "y0": 0.0, "x1": 800.0, "y1": 400.0}
            }
        ]
    }"#;
    let page = Page::from_json_str(json).unwrap();
    page.validate().unwrap();

    let section = &page.sections[0];
    assert_eq!(section.margin, EdgeInsets::uniform(-80.0));
    assert_eq!(section.timing.initial_delay_ms, 80);
    assert_eq!(section.timing.stagger_interval_ms, 80);
    assert_eq!(section.timing.block_duration_ms, 450);
    assert_eq!(section.timing.container_duration_ms, 600);
    assert!(section.subtitle.is_none());
    assert!(section.blocks.is_empty());
    assert!(page.layers.is_empty());
    assert_eq!(page.seed, 0);

    let json = r#"{
        "sections": [],
        "layers": [{"id": "bg", "shapes": [{"id": "orb"}]}]
    }"#;
    let page = Page::from_json_str(json).unwrap();
    page.validate().unwrap();
    let shape = &page.layers[0].shapes[0];
    assert_eq!(shape.opacity, 1.0);
    assert_eq!(shape.rest, Transform2D::default());
    assert!(shape.drift.is_none());
}
