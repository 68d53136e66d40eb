use crate::{
    animation::anim::Anim,
    foundation::core::{EdgeInsets, Rect, Transform2D, Vec2},
    foundation::error::{UnveilError, UnveilResult},
    page::model::{
        AmbientLayer, AmbientShape, ContentBlock, DriftAxis, DriftBinding, Page, Section,
    },
    reveal::schedule::RevealTiming,
    scroll::map::ScrollMap,
};

/// Fluent builder for [`Page`].
pub struct PageBuilder {
    sections: Vec<Section>,
    layers: Vec<AmbientLayer>,
    seed: u64,
}

impl PageBuilder {
    /// Start an empty page.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            layers: Vec::new(),
            seed: 0,
        }
    }

    /// Set the procedural determinism seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Append a section; section ids must be unique.
    pub fn section(mut self, section: Section) -> UnveilResult<Self> {
        if self.sections.iter().any(|s| s.id == section.id) {
            return Err(UnveilError::validation(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        self.sections.push(section);
        Ok(self)
    }

    /// Append a background layer; layer ids must be unique.
    pub fn layer(mut self, layer: AmbientLayer) -> UnveilResult<Self> {
        if self.layers.iter().any(|l| l.id == layer.id) {
            return Err(UnveilError::validation(format!(
                "duplicate layer id '{}'",
                layer.id
            )));
        }
        self.layers.push(layer);
        Ok(self)
    }

    /// Validate and produce the page.
    pub fn build(self) -> UnveilResult<Page> {
        let page = Page {
            sections: self.sections,
            layers: self.layers,
            seed: self.seed,
        };
        page.validate()?;
        Ok(page)
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent builder for [`Section`].
pub struct SectionBuilder {
    id: String,
    heading: String,
    subtitle: Option<String>,
    badge: Option<String>,
    region: Rect,
    margin: EdgeInsets,
    timing: RevealTiming,
    blocks: Vec<ContentBlock>,
}

impl SectionBuilder {
    /// Start a section occupying `region`, with the default trigger margin
    /// and reveal timing.
    pub fn new(id: impl Into<String>, heading: impl Into<String>, region: Rect) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            subtitle: None,
            badge: None,
            region,
            margin: EdgeInsets::uniform(-80.0),
            timing: RevealTiming::default(),
            blocks: Vec::new(),
        }
    }

    /// Set the subtitle line.
    pub fn subtitle(mut self, text: impl Into<String>) -> Self {
        self.subtitle = Some(text.into());
        self
    }

    /// Set the badge name.
    pub fn badge(mut self, name: impl Into<String>) -> Self {
        self.badge = Some(name.into());
        self
    }

    /// Override the trigger margin.
    pub fn margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    /// Override the reveal timing.
    pub fn timing(mut self, timing: RevealTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Append a content block; insertion order is reveal order.
    pub fn block(mut self, id: impl Into<String>) -> Self {
        self.blocks.push(ContentBlock { id: id.into() });
        self
    }

    /// Validate and produce the section.
    pub fn build(self) -> UnveilResult<Section> {
        if self.id.trim().is_empty() {
            return Err(UnveilError::validation("section id must be non-empty"));
        }
        let section = Section {
            id: self.id,
            heading: self.heading,
            subtitle: self.subtitle,
            badge: self.badge,
            region: self.region,
            margin: self.margin,
            timing: self.timing,
            blocks: self.blocks,
        };
        section.validate()?;
        Ok(section)
    }
}

/// Fluent builder for [`AmbientLayer`].
pub struct LayerBuilder {
    id: String,
    shapes: Vec<AmbientShape>,
}

impl LayerBuilder {
    /// Start an empty layer.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shapes: Vec::new(),
        }
    }

    /// Append a shape (back to front).
    pub fn shape(mut self, shape: AmbientShape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Produce the layer.
    pub fn build(self) -> UnveilResult<AmbientLayer> {
        if self.id.trim().is_empty() {
            return Err(UnveilError::validation("layer id must be non-empty"));
        }
        Ok(AmbientLayer {
            id: self.id,
            shapes: self.shapes,
        })
    }
}

/// Fluent builder for [`AmbientShape`].
pub struct ShapeBuilder {
    id: String,
    rest: Transform2D,
    translate: Anim<Vec2>,
    scale: Anim<f64>,
    rotation: Anim<f64>,
    opacity: f64,
    drift: Option<DriftBinding>,
}

impl ShapeBuilder {
    /// Start a shape at the identity rest placement with constant channels.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rest: Transform2D::default(),
            translate: Anim::constant(Vec2::ZERO),
            scale: Anim::constant(1.0),
            rotation: Anim::constant(0.0),
            opacity: 1.0,
            drift: None,
        }
    }

    /// Set the rest placement.
    pub fn rest(mut self, rest: Transform2D) -> Self {
        self.rest = rest;
        self
    }

    /// Set the translation channel.
    pub fn translate(mut self, a: Anim<Vec2>) -> Self {
        self.translate = a;
        self
    }

    /// Set the scale channel.
    pub fn scale(mut self, a: Anim<f64>) -> Self {
        self.scale = a;
        self
    }

    /// Set the rotation channel, in radians.
    pub fn rotation(mut self, a: Anim<f64>) -> Self {
        self.rotation = a;
        self
    }

    /// Set the static opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Bind a scroll-linked drift.
    pub fn drift(mut self, map: ScrollMap, axis: DriftAxis) -> Self {
        self.drift = Some(DriftBinding { map, axis });
        self
    }

    /// Validate and produce the shape.
    pub fn build(self) -> UnveilResult<AmbientShape> {
        if self.id.trim().is_empty() {
            return Err(UnveilError::validation("shape id must be non-empty"));
        }
        let shape = AmbientShape {
            id: self.id,
            rest: self.rest,
            translate: self.translate,
            scale: self.scale,
            rotation: self.rotation,
            opacity: self.opacity,
            drift: self.drift,
        };
        shape.validate()?;
        Ok(shape)
    }
}
