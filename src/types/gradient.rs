//! Gradient descriptors.
//!
//! A [`Gradient`] is plain data: ordered colour stops plus the geometry a
//! renderer needs to draw them. Nothing here rasterizes.

use palette::Srgba;
use serde::{Deserialize, Serialize};

use crate::native;
use crate::types::Colour;

/// How the renderer should interpolate between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Linear interpolation along the start/end line.
    #[default]
    Axial,
    /// Ellipse centred on the start point, reaching the end point.
    Radial,
    /// Sweep around the start point.
    Conic,
}

impl std::str::FromStr for GradientKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "axial" | "linear" => Ok(Self::Axial),
            "radial" => Ok(Self::Radial),
            "conic" => Ok(Self::Conic),
            other => Err(format!("unknown gradient kind '{}'", other)),
        }
    }
}

/// Default start point: top centre of the unit square.
pub const DEFAULT_START: [f32; 2] = [0.5, 0.0];

/// Default end point: bottom centre of the unit square.
pub const DEFAULT_END: [f32; 2] = [0.5, 1.0];

/// A gradient ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    /// Stops in drawing order.
    pub colours: Vec<Colour>,
    /// Start point in unit coordinates.
    pub start_point: [f32; 2],
    /// End point in unit coordinates.
    pub end_point: [f32; 2],
    /// Stop positions. `None` spreads the stops evenly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<f32>>,
}

impl Gradient {
    /// Stops converted to the renderer's colour type, in order.
    pub fn native_colours(&self) -> Vec<Srgba<f32>> {
        self.colours.iter().copied().map(native::to_native).collect()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

/// Builder for gradients.
///
/// Colours are fixed at construction; everything else is configured
/// afterwards, then [`GradientBuilder::build`] produces the descriptor.
#[derive(Debug, Clone)]
pub struct GradientBuilder {
    colours: Vec<Colour>,
    kind: GradientKind,
    start_point: [f32; 2],
    end_point: [f32; 2],
    locations: Option<Vec<f32>>,
}

impl GradientBuilder {
    /// Create a builder from stops in drawing order.
    pub fn new<I>(colours: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Colour>,
    {
        Self {
            colours: colours.into_iter().map(Into::into).collect(),
            kind: GradientKind::default(),
            start_point: DEFAULT_START,
            end_point: DEFAULT_END,
            locations: None,
        }
    }

    /// Set the gradient kind.
    pub fn kind(mut self, kind: GradientKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the start point.
    pub fn start_point(mut self, x: f32, y: f32) -> Self {
        self.start_point = [x, y];
        self
    }

    /// Set the end point.
    pub fn end_point(mut self, x: f32, y: f32) -> Self {
        self.end_point = [x, y];
        self
    }

    /// Set explicit stop locations.
    pub fn locations(mut self, locations: impl Into<Vec<f32>>) -> Self {
        self.locations = Some(locations.into());
        self
    }

    /// Apply a configuration step.
    pub fn configure<F>(self, configure: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        configure(self)
    }

    /// Stops assembled so far.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Build the gradient.
    pub fn build(self) -> Gradient {
        Gradient {
            kind: self.kind,
            colours: self.colours,
            start_point: self.start_point,
            end_point: self.end_point,
            locations: self.locations,
        }
    }
}

/// Assemble `colours` into a gradient, then apply `configure` once.
///
/// Any number of colours is accepted, including none.
pub fn build_gradient<I, F>(colours: I, configure: Option<F>) -> Gradient
where
    I: IntoIterator,
    I::Item: Into<Colour>,
    F: FnOnce(GradientBuilder) -> GradientBuilder,
{
    let builder = GradientBuilder::new(colours);
    match configure {
        Some(f) => builder.configure(f),
        None => builder,
    }
    .build()
}
