//! Gradient definition files (`*.gradient.yaml`).
//!
//! ```yaml
//! kind: radial
//! colours: ["#1a1a2e", "#e94560"]
//! start: [0.5, 0.5]
//! end: [1.0, 1.0]
//! locations: [0.0, 1.0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::types::{Colour, GradientBuilder, GradientKind};

/// A gradient as written in a definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientDef {
    /// Hex colours in stop order.
    pub colours: Vec<String>,

    /// Gradient kind. Defaults to axial.
    pub kind: Option<GradientKind>,

    /// Start point in unit coordinates.
    pub start: Option<[f32; 2]>,

    /// End point in unit coordinates.
    pub end: Option<[f32; 2]>,

    /// Stop positions.
    pub locations: Option<Vec<f32>>,
}

impl GradientDef {
    /// Load a definition from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read gradient definition: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a definition from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid gradient definition: {}", e),
            help: Some("Expected keys: colours, kind, start, end, locations".to_string()),
        })
    }

    /// Resolve the colours and return a configured builder.
    pub fn into_builder(self) -> Result<GradientBuilder> {
        let colours = self
            .colours
            .iter()
            .map(|hex| Colour::from_hex(hex))
            .collect::<Result<Vec<_>>>()?;

        let mut builder = GradientBuilder::new(colours);
        if let Some(kind) = self.kind {
            builder = builder.kind(kind);
        }
        if let Some([x, y]) = self.start {
            builder = builder.start_point(x, y);
        }
        if let Some([x, y]) = self.end {
            builder = builder.end_point(x, y);
        }
        if let Some(locations) = self.locations {
            builder = builder.locations(locations);
        }

        Ok(builder)
    }
}
