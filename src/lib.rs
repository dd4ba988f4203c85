//! fn-graph: function graphing engine.
//!
//! Plots real functions of one variable onto a fixed-size canvas, picks
//! readable grid spacing, and numerically locates roots, extrema, inflection
//! points, intercepts and asymptotes. Drawing goes through a backend-neutral
//! [`render::RenderFrame`].

pub mod analysis;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FunctionGraph, GraphConfig, GraphOptions, PlottedFunction, ShadedRegion};
pub use error::{GraphError, GraphResult};
