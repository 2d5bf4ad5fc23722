//! Parsers for swatch definition files.
//!
//! # Usage
//!
//! ```ignore
//! use swatch::parser::GradientDef;
//!
//! let def = GradientDef::load(Path::new("sunset.gradient.yaml"))?;
//! let gradient = def.into_builder()?.build();
//! ```

pub mod gradient;

pub use gradient::GradientDef;
