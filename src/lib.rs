pub mod models;
pub mod output;
pub mod parsers;
pub mod processors;
pub mod utils;

// 주요 기능 재내보내기(re-exporting)
pub use models::{
    Device, Marker, OperationCategory, RegionSelection, RegionStats, Series, SeriesKey,
    SizeHistogram, TraceEvent, TracePoint,
};
pub use parsers::{parse_block_rq_line, parse_trace};
pub use processors::{aggregate_region, build_series, build_size_histogram, TraceGrouping};
pub use utils::{filter_trace, TimeWindow};
