pub mod block_rq;

pub use block_rq::{parse_block_rq_line, parse_trace, scan_events};
