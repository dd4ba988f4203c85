pub mod axis;
pub mod grid;
pub mod label_format;
pub mod mapper;
pub mod sampler;
pub mod scale;
pub mod shading;
pub mod types;

pub use axis::{AxisDirection, GraphAxis, Tick, tick_values};
pub use grid::{GridSpacing, optimal_spacing};
pub use label_format::{format_coordinate, format_tick_label};
pub use mapper::CoordinateMapper;
pub use sampler::{Sample, evaluate_grid, sample_function, sample_step, split_runs};
pub use scale::LinearScale;
pub use shading::{RegionBound, ShadedPolygon, build_shaded_polygon};
pub use types::{DataPoint, Interval, PixelPoint, Viewport};
