pub mod constants;
pub mod encoding;
pub mod filter;
pub mod logger;

pub use self::encoding::{decode_bytes_auto, read_trace_file_async};
pub use self::filter::{filter_grouping, filter_trace, TimeWindow};
pub use self::logger::Logger;
