pub mod csv;
pub mod json;
mod statistics;

pub use self::csv::{save_events_to_csv, save_histogram_to_csv};
pub use self::json::{save_histogram_json, save_region_json, save_series_json};
pub use statistics::{print_region_stats, print_size_histogram, print_trace_summary};
