//! Numerical feature detection on sampled functions.
//!
//! Every finder works from plain evaluations and finite differences; none of
//! them reports an error. A feature that cannot be located or refined is
//! simply absent from the output.

pub mod asymptotes;
pub mod derivative;
pub mod extrema;
pub mod inflection;
pub mod remarkable;
pub mod roots;

pub use asymptotes::{BreakKind, CurveBreak, find_breaks};
pub use extrema::{Extremum, ExtremumKind, find_extrema};
pub use inflection::find_inflection_points;
pub use remarkable::{
    FunctionCallback, RemarkableKind, RemarkablePoint, RemarkablePointCache,
    RemarkablePointQuery, detect_remarkable_points,
};
pub use roots::find_roots;
