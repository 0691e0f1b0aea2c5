mod histogram;
mod operation;
mod region;
mod series;
mod trace_event;

pub use histogram::SizeHistogram;
pub use operation::OperationCategory;
pub use region::{RegionSelection, RegionStats};
pub use series::{Marker, Series, SeriesKey, TracePoint, MARKERS};
pub use trace_event::{sectors_to_kb, Device, TraceEvent};
