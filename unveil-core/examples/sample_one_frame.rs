use unveil::{
    DriftAxis, Ease, LayerBuilder, PageBuilder, PageSession, Rect, ScrollMap, SectionBuilder,
    SessionOpts, ShapeBuilder, TimeMs, Transform2D, Vec2, Viewport, cycle,
};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let hero = SectionBuilder::new(
        "hero",
        "Building generative motion",
        Rect::new(0.0, 0.0, 1200.0, 640.0),
    )
    .subtitle("Portfolio, but deterministic")
    .badge("2026")
    .block("intro")
    .block("stack")
    .block("contact")
    .build()?;

    let glow = ShapeBuilder::new("glow")
        .rest(Transform2D {
            translate: Vec2::new(980.0, 220.0),
            ..Transform2D::default()
        })
        .translate(cycle(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(-12.0, 10.0),
                Vec2::new(8.0, -6.0),
                Vec2::new(0.0, 0.0),
            ],
            9_000,
            Ease::InOutQuad,
        ))
        .opacity(0.55)
        .drift(ScrollMap::new([0.0, 900.0], [0.0, -120.0])?, DriftAxis::Y)
        .build()?;

    let page = PageBuilder::new()
        .seed(7)
        .section(hero)?
        .layer(LayerBuilder::new("backdrop").shape(glow).build()?)?
        .build()?;

    let session = PageSession::new(
        page,
        SessionOpts {
            viewport: Some(Viewport::new(1440.0, 900.0)?),
            scroll: Some(0.0),
            mounted_at: TimeMs(0),
        },
    )?;

    // The hero is on screen at mount, so these four instants walk the
    // staggered reveal from hidden to fully settled.
    for at in [0u64, 240, 480, 690] {
        let frame = session.sample(TimeMs(at))?;
        println!("{}", serde_json::to_string(&frame)?);
    }
    Ok(())
}
