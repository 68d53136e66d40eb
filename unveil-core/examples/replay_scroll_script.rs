use unveil::{
    Page, PageBuilder, Rect, ScrollEvent, ScrollScript, SectionBuilder, Viewport, replay,
};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn build_page() -> anyhow::Result<Page> {
    let hero = SectionBuilder::new(
        "hero",
        "Building generative motion",
        Rect::new(0.0, 0.0, 1200.0, 640.0),
    )
    .block("intro")
    .block("contact")
    .build()?;
    let work = SectionBuilder::new(
        "work",
        "Selected work",
        Rect::new(0.0, 1600.0, 1200.0, 2200.0),
    )
    .block("grid")
    .build()?;
    Ok(PageBuilder::new().section(hero)?.section(work)?.build()?)
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let script = ScrollScript {
        viewport: Some(Viewport::new(1440.0, 900.0)?),
        events: vec![
            ScrollEvent {
                at_ms: 0,
                offset: 0.0,
            },
            ScrollEvent {
                at_ms: 600,
                offset: 800.0,
            },
        ],
        sample_every_ms: 48,
        until_ms: 1440,
    };
    let frames = replay(build_page()?, &script)?;

    let mut out = String::new();
    for frame in &frames {
        out.push_str(&serde_json::to_string(frame)?);
        out.push('\n');
    }
    let out_path = std::path::Path::new("target").join("replay_frames.jsonl");
    std::fs::write(&out_path, out)?;

    eprintln!("wrote {} ({} frames)", out_path.display(), frames.len());
    Ok(())
}
