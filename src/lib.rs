pub use analysis::{Analyzer, AnalyzerConfig, EdgeProximity, EdgeResult, PairGap};
pub use boundary::{Boundary, Edge, EdgeClearances};
pub use cgmath;
pub use obstacle::{Obstacle, Scale, ScaledObstacle, REFERENCE_OBSTACLES};
pub use report::write_report;
pub use util::Interval;

mod analysis;
mod boundary;
pub mod math;
mod obstacle;
mod report;
mod util;
