//! Public graph API: configuration, the immutable [`FunctionGraph`] engine and
//! its serializable snapshot.

mod config;
mod frame_builder;
mod function;
mod graph;
mod range_resolver;
mod snapshot;
pub mod style;
mod validation;

pub use config::{GraphConfig, GraphOptions, ShadedRegion};
pub use function::PlottedFunction;
pub use graph::FunctionGraph;
pub use snapshot::GraphSnapshot;
pub use style::ElementStyle;
pub use validation::MAX_SAMPLE_COUNT;
