use tracing::debug;

use crate::analysis::{
    FunctionCallback, RemarkablePoint, RemarkablePointCache, RemarkablePointQuery,
};
use crate::core::{
    CoordinateMapper, GraphAxis, GridSpacing, Interval, PixelPoint, RegionBound, Sample,
    ShadedPolygon, Viewport, build_shaded_polygon, sample_function, split_runs,
};
use crate::error::{GraphError, GraphResult};
use crate::render::{PathData, RenderFrame, Renderer};

use super::frame_builder::FrameBuilder;
use super::range_resolver::resolve_auto_range;
use super::snapshot::GraphSnapshot;
use super::validation::{validate_grid_spacing, validate_options};
use super::{GraphConfig, GraphOptions, PlottedFunction, ShadedRegion};

/// Immutable function graph.
///
/// Range, grid spacing, axes and remarkable points are resolved once in
/// [`FunctionGraph::new`]. Curve and shaded-region geometry is recomputed on
/// every request from that fixed state.
#[derive(Debug)]
pub struct FunctionGraph {
    functions: Vec<PlottedFunction>,
    options: GraphOptions,
    mapper: CoordinateMapper,
    grid_spacing: GridSpacing,
    x_axis: GraphAxis,
    y_axis: GraphAxis,
    remarkable_points: RemarkablePointCache,
}

impl FunctionGraph {
    /// Validates `config` and computes all derived state.
    ///
    /// Malformed configuration (empty or inverted domain, fewer than two
    /// samples, zero-sized viewport, dangling shaded-region references) is
    /// rejected here rather than clamped.
    pub fn new(config: GraphConfig) -> GraphResult<Self> {
        let GraphConfig { functions, options } = config;
        validate_options(&options, functions.len())?;

        let callbacks: Vec<FunctionCallback> =
            functions.iter().map(|f| f.callback().clone()).collect();
        let range = match options.range {
            Some(range) => range,
            None => resolve_auto_range(&callbacks, options.domain, options.samples),
        };
        let mapper = CoordinateMapper::new(options.domain, range, options.viewport)?;

        let grid_spacing = match options.grid_spacing {
            Some(spacing) => validate_grid_spacing(spacing, options.domain, range)?,
            None => GridSpacing::optimal(
                options.viewport,
                options.domain,
                range,
                options.min_label_density_px,
            ),
        };
        let x_axis = GraphAxis::horizontal(mapper, grid_spacing.dx);
        let y_axis = GraphAxis::vertical(mapper, grid_spacing.dy);

        let remarkable_points = if options.detect_remarkable_points {
            RemarkablePointCache::build(&callbacks, mapper, options.samples)
        } else {
            RemarkablePointCache::empty(functions.len())
        };

        debug!(
            functions = functions.len(),
            samples = options.samples,
            domain_start = options.domain.start,
            domain_end = options.domain.end,
            range_start = range.start,
            range_end = range.end,
            dx = grid_spacing.dx,
            dy = grid_spacing.dy,
            remarkable_points = remarkable_points.len(),
            "function graph built"
        );

        Ok(Self {
            functions,
            options,
            mapper,
            grid_spacing,
            x_axis,
            y_axis,
            remarkable_points,
        })
    }

    #[must_use]
    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    #[must_use]
    pub fn functions(&self) -> &[PlottedFunction] {
        &self.functions
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.options.viewport
    }

    #[must_use]
    pub fn domain(&self) -> Interval {
        self.mapper.domain()
    }

    /// Configured range, or the auto-derived one.
    #[must_use]
    pub fn range(&self) -> Interval {
        self.mapper.range()
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.options.samples
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    #[must_use]
    pub fn grid_spacing(&self) -> GridSpacing {
        self.grid_spacing
    }

    #[must_use]
    pub fn x_axis(&self) -> &GraphAxis {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &GraphAxis {
        &self.y_axis
    }

    /// Canvas-relative pixel position of a mathematical point.
    #[must_use]
    pub fn math_to_pixel(&self, x: f64, y: f64) -> PixelPoint {
        self.mapper.math_to_pixel(x, y)
    }

    /// Drawing samples of one function, `None` for an unknown index.
    #[must_use]
    pub fn sample(&self, function_index: usize) -> Option<Vec<Sample>> {
        let function = self.functions.get(function_index)?;
        Some(sample_function(
            function.callback().as_ref(),
            self.domain(),
            self.range(),
            self.samples(),
        ))
    }

    /// Canvas-relative curve path, broken wherever the function is undefined
    /// or leaves the range.
    #[must_use]
    pub fn function_path(&self, function_index: usize) -> Option<PathData> {
        let samples = self.sample(function_index)?;
        let runs = split_runs(&samples);
        Some(PathData::from_runs(runs.into_iter().map(|run| {
            run.into_iter()
                .map(|point| self.mapper.point_to_pixel(point))
                .collect::<Vec<_>>()
        })))
    }

    /// Outline of `region` in mathematical coordinates.
    pub fn shaded_polygon(&self, region: &ShadedRegion) -> GraphResult<ShadedPolygon> {
        let range = self.range();
        let top = self.region_bound(region.top, RegionBound::visible_top(range))?;
        let bottom = self.region_bound(region.bottom, RegionBound::axis_floor(range))?;
        let domain = match region.domain {
            Some(domain) => domain.validate("shaded region domain")?,
            None => self.domain(),
        };

        Ok(build_shaded_polygon(top, bottom, domain, range, self.samples()))
    }

    /// Closed canvas-relative fill path for `region`; empty when no sample
    /// position has both bounds defined.
    pub fn shaded_path(&self, region: &ShadedRegion) -> GraphResult<PathData> {
        let polygon = self.shaded_polygon(region)?;
        Ok(PathData::closed_polygon(
            polygon
                .outline()
                .map(|point| self.mapper.point_to_pixel(point)),
        ))
    }

    fn region_bound(
        &self,
        function_index: Option<usize>,
        fallback: RegionBound<'static>,
    ) -> GraphResult<RegionBound<'_>> {
        let Some(index) = function_index else {
            return Ok(fallback);
        };
        let function = self.functions.get(index).ok_or_else(|| {
            GraphError::InvalidData(format!("shaded region refers to unknown function {index}"))
        })?;
        Ok(RegionBound::Curve(function.callback().as_ref()))
    }

    /// Cached remarkable points matching `query`, in function then x order.
    ///
    /// The cache is never modified after construction, so repeated queries
    /// return identical results.
    #[must_use]
    pub fn remarkable_points(&self, query: RemarkablePointQuery) -> Vec<&RemarkablePoint> {
        self.remarkable_points.query(query)
    }

    #[must_use]
    pub fn remarkable_point_cache(&self) -> &RemarkablePointCache {
        &self.remarkable_points
    }

    /// Materializes every visible element for one draw call, placed at the
    /// absolute `origin` supplied by the layout.
    pub fn build_frame(&self, origin: PixelPoint) -> GraphResult<RenderFrame> {
        FrameBuilder::new(self, origin).build()
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R, origin: PixelPoint) -> GraphResult<()> {
        let frame = self.build_frame(origin)?;
        renderer.render(&frame)
    }

    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            viewport: self.viewport(),
            domain: self.domain(),
            range: self.range(),
            samples: self.samples(),
            grid_spacing: self.grid_spacing,
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            remarkable_points: self.remarkable_points.iter().cloned().collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
