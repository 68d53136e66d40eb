use std::collections::BTreeSet;

use crate::{
    animation::anim::Anim,
    foundation::core::{EdgeInsets, Rect, Transform2D, Vec2},
    foundation::error::{UnveilError, UnveilResult},
    reveal::schedule::RevealTiming,
    scroll::map::ScrollMap,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete scrollable page description.
///
/// A page is a pure data model that can be:
/// - built programmatically (see [`crate::PageBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Evaluating a page is performed by [`crate::eval_page`], or statefully (with
/// intersection tracking and reveal latching) by [`crate::PageSession`].
pub struct Page {
    /// Ordered content sections, top to bottom in document space.
    pub sections: Vec<Section>,
    /// Decorative background layers, rendered behind every section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<AmbientLayer>,
    /// Global deterministic seed used by procedural animation sources.
    #[serde(default)]
    pub seed: u64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A card-style content section revealed once it scrolls into view.
pub struct Section {
    /// Section identifier (stable within a page).
    pub id: String,
    /// Heading text.
    pub heading: String,
    /// Optional subtitle line under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Optional opaque badge name rendered beside the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Document-space rectangle the section occupies; drives intersection.
    pub region: Rect,
    /// Trigger margin applied to the viewport when testing this section.
    ///
    /// Negative insets shrink the effective viewport, so the section must
    /// scroll further in before its reveal fires.
    #[serde(default = "default_section_margin")]
    pub margin: EdgeInsets,
    /// Reveal timing for the container and its staggered blocks.
    #[serde(default)]
    pub timing: RevealTiming,
    /// Ordered opaque content blocks, staggered on reveal.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<ContentBlock>,
}

fn default_section_margin() -> EdgeInsets {
    EdgeInsets::uniform(-80.0)
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// An opaque renderable unit inside a section.
///
/// The engine imposes no schema beyond a stable id and a stable order; what
/// the block renders is the embedder's concern. A block's position in
/// [`Section::blocks`] is its reveal index.
pub struct ContentBlock {
    /// Block identifier (stable within its section).
    pub id: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A decorative background layer of looping shapes.
pub struct AmbientLayer {
    /// Layer identifier (stable within a page).
    pub id: String,
    /// Shapes composing the layer, back to front.
    pub shapes: Vec<AmbientShape>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One looping decorative shape.
///
/// Channel animations are sampled against page time and composed onto the
/// rest placement: translation adds, scale multiplies, rotation adds. Motion
/// runs regardless of any section's reveal state.
pub struct AmbientShape {
    /// Shape identifier (stable within its layer).
    pub id: String,
    /// Placement when every channel is at rest.
    #[serde(default)]
    pub rest: Transform2D,
    /// Translation channel, added to the rest translation.
    #[serde(default = "default_translate_channel")]
    pub translate: Anim<Vec2>,
    /// Scale channel, multiplied onto the rest scale.
    #[serde(default = "default_scale_channel")]
    pub scale: Anim<f64>,
    /// Rotation channel in radians, added to the rest rotation.
    #[serde(default = "default_rotation_channel")]
    pub rotation: Anim<f64>,
    /// Static opacity in `[0, 1]`.
    #[serde(default = "default_shape_opacity")]
    pub opacity: f64,
    /// Optional scroll-linked additive drift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift: Option<DriftBinding>,
}

fn default_translate_channel() -> Anim<Vec2> {
    Anim::constant(Vec2::ZERO)
}

fn default_scale_channel() -> Anim<f64> {
    Anim::constant(1.0)
}

fn default_rotation_channel() -> Anim<f64> {
    Anim::constant(0.0)
}

fn default_shape_opacity() -> f64 {
    1.0
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Scroll-linked additive offset for an ambient shape.
///
/// When the session has no scroll offset the contribution is zero and the
/// shape's base loop keeps running.
pub struct DriftBinding {
    /// Map from scroll offset to drift distance.
    pub map: ScrollMap,
    /// Axis the mapped distance is applied on.
    #[serde(default)]
    pub axis: DriftAxis,
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// Axis selector for drift application.
pub enum DriftAxis {
    /// Horizontal drift.
    X,
    /// Vertical drift (parallax against the vertical scroll).
    #[default]
    Y,
}

impl Page {
    /// Validate ids, geometry, timing, and every animation channel.
    pub fn validate(&self) -> UnveilResult<()> {
        let mut section_ids = BTreeSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(UnveilError::validation("section id must be non-empty"));
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(UnveilError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            section.validate()?;
        }

        let mut layer_ids = BTreeSet::new();
        for layer in &self.layers {
            if layer.id.trim().is_empty() {
                return Err(UnveilError::validation("layer id must be non-empty"));
            }
            if !layer_ids.insert(layer.id.as_str()) {
                return Err(UnveilError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }

            let mut shape_ids = BTreeSet::new();
            for shape in &layer.shapes {
                if shape.id.trim().is_empty() {
                    return Err(UnveilError::validation(format!(
                        "layer '{}' shape id must be non-empty",
                        layer.id
                    )));
                }
                if !shape_ids.insert(shape.id.as_str()) {
                    return Err(UnveilError::validation(format!(
                        "layer '{}' has duplicate shape id '{}'",
                        layer.id, shape.id
                    )));
                }
                shape.validate()?;
            }
        }

        Ok(())
    }

    /// Parse a page from its JSON representation.
    pub fn from_json_str(json: &str) -> UnveilResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| UnveilError::serde(format!("page JSON parse failed: {e}")))
    }

    /// Serialize the page to pretty-printed JSON.
    pub fn to_json_string(&self) -> UnveilResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| UnveilError::serde(format!("page JSON serialize failed: {e}")))
    }
}

impl Section {
    /// Validate section invariants: heading, geometry, timing, block ids.
    pub fn validate(&self) -> UnveilResult<()> {
        if self.heading.trim().is_empty() {
            return Err(UnveilError::validation(format!(
                "section '{}' heading must be non-empty",
                self.id
            )));
        }
        if !self.region.is_finite() {
            return Err(UnveilError::validation(format!(
                "section '{}' region must be finite",
                self.id
            )));
        }
        if self.region.width() < 0.0 || self.region.height() < 0.0 {
            return Err(UnveilError::validation(format!(
                "section '{}' region must have non-negative extent",
                self.id
            )));
        }
        if !self.margin.is_finite() {
            return Err(UnveilError::validation(format!(
                "section '{}' margin must be finite",
                self.id
            )));
        }
        self.timing.validate()?;

        let mut block_ids = BTreeSet::new();
        for block in &self.blocks {
            if block.id.trim().is_empty() {
                return Err(UnveilError::validation(format!(
                    "section '{}' block id must be non-empty",
                    self.id
                )));
            }
            if !block_ids.insert(block.id.as_str()) {
                return Err(UnveilError::validation(format!(
                    "section '{}' has duplicate block id '{}'",
                    self.id, block.id
                )));
            }
        }
        Ok(())
    }
}

impl AmbientShape {
    /// Validate channel animations and static opacity.
    pub fn validate(&self) -> UnveilResult<()> {
        self.translate.validate()?;
        self.scale.validate()?;
        self.rotation.validate()?;
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(UnveilError::validation(format!(
                "shape '{}' opacity must be finite and within [0, 1]",
                self.id
            )));
        }
        if let Some(drift) = &self.drift {
            drift.map.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
