mod grouping;
mod histogram;
mod region;
mod series;

pub use grouping::{group_events, TraceGrouper, TraceGrouping};
pub use histogram::build_size_histogram;
pub use region::aggregate_region;
pub use series::build_series;
