// block_rq_issue trace text parsing

use crate::models::{Device, TraceEvent};
use crate::processors::{group_events, TraceGrouping};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // ASCII 숫자만 허용 (\d 는 유니코드 숫자까지 매칭)
    // <time>: block_rq_issue: <major>,<minor> <rwbs> [<bytes>] () <sector> + <nr_sector>
    pub static ref BLOCK_RQ_ISSUE_RE: Regex = Regex::new(
        r"(?P<time>[0-9]+\.[0-9]+):\s+block_rq_issue:\s+(?P<major>[0-9]+),(?P<minor>[0-9]+)\s+(?P<rwbs>[RWDFMS]+)\s+(?P<bytes>[0-9]+)?\s*\(\)\s+(?P<sector>[0-9]+)\s+\+\s+(?P<length>[0-9]+)"
    )
    .unwrap();
}

/// Scan `text` for every `block_rq_issue` record, in text order.
///
/// Non-matching lines and device `0,0` records are skipped. The scan keeps no
/// state between calls.
pub fn scan_events(text: &str) -> impl Iterator<Item = TraceEvent> + '_ {
    BLOCK_RQ_ISSUE_RE
        .captures_iter(text)
        .filter_map(|caps| event_from_captures(&caps))
}

/// Parse raw trace text into per-(device, category) event lists.
pub fn parse_trace(text: &str) -> TraceGrouping {
    group_events(scan_events(text))
}

/// Parse a single line. Returns `None` for anything that is not a usable issue record.
pub fn parse_block_rq_line(line: &str) -> Option<TraceEvent> {
    BLOCK_RQ_ISSUE_RE
        .captures(line)
        .and_then(|caps| event_from_captures(&caps))
}

fn event_from_captures(caps: &Captures<'_>) -> Option<TraceEvent> {
    // 숫자 범위를 벗어난 값은 매칭 실패로 취급
    let device = Device::new(caps["major"].parse().ok()?, caps["minor"].parse().ok()?);
    if device.is_placeholder() {
        return None;
    }

    Some(TraceEvent::new(
        caps["time"].parse().ok()?,
        device,
        &caps["rwbs"],
        caps["sector"].parse().ok()?,
        caps["length"].parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationCategory, SeriesKey};

    const READ_LINE: &str = "1234.500000: block_rq_issue: 8,0 R 0 () 1000 + 8";
    const PLACEHOLDER_LINE: &str = "1234.600000: block_rq_issue: 0,0 W 0 () 1 + 16";

    #[test]
    fn test_parse_read_line() {
        let event = parse_block_rq_line(READ_LINE).unwrap();
        assert_eq!(event.time, 1234.5);
        assert_eq!(event.device, Device::new(8, 0));
        assert_eq!(&*event.flags, "R");
        assert_eq!(event.sector, 1000);
        assert_eq!(event.length, 8);
        assert_eq!(event.size_kb, 4.0);
    }

    #[test]
    fn test_ftrace_prefix_and_comm_suffix() {
        let line = "  test-123   [000] ..... 12345.678901: block_rq_issue: 8,0 WS 4096 () 1000 + 8 [test]";
        let event = parse_block_rq_line(line).unwrap();
        assert_eq!(event.time, 12345.678901);
        assert_eq!(&*event.flags, "WS");
        assert_eq!(event.sector, 1000);
    }

    #[test]
    fn test_optional_bytes_field() {
        let event = parse_block_rq_line("5.000001: block_rq_issue: 259,0 FF () 0 + 0").unwrap();
        assert_eq!(event.device, Device::new(259, 0));
        assert_eq!(event.length, 0);
        assert_eq!(event.size_kb, 0.0);
    }

    #[test]
    fn test_placeholder_device_dropped() {
        assert!(parse_block_rq_line(PLACEHOLDER_LINE).is_none());
        let grouping = parse_trace(&format!("{READ_LINE}\n{PLACEHOLDER_LINE}\n"));
        assert_eq!(grouping.len(), 1);
        assert!(grouping.keys().all(|k| !k.device.is_placeholder()));
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let text = "\
# tracer: nop
garbage line
1.000000: block_rq_complete: 8,0 R () 1000 + 8 [0]
1.5: block_rq_issue: 8,0 X 0 () 1 + 1
2: block_rq_issue: 8,0 R 0 () 1 + 1
1234.500000: block_rq_issue: 8,0 R 0 () 1000 + 8
";
        let events: Vec<_> = scan_events(text).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sector, 1000);
    }

    #[test]
    fn test_overflowing_numbers_skipped() {
        let line = "1.000000: block_rq_issue: 99999999999,0 R 0 () 1 + 8";
        assert!(parse_block_rq_line(line).is_none());
    }

    #[test]
    fn test_all_matches_returned_in_order() {
        let text = "1.0: block_rq_issue: 8,0 R 0 () 10 + 8\r\n2.0: block_rq_issue: 8,0 R 0 () 20 + 8\r\n3.0: block_rq_issue: 8,0 R 0 () 30 + 8";
        let sectors: Vec<u64> = scan_events(text).map(|e| e.sector).collect();
        assert_eq!(sectors, vec![10, 20, 30]);
    }

    #[test]
    fn test_non_ascii_digit_before_record() {
        // U+0661 ARABIC-INDIC DIGIT ONE
        let text = "x\u{0661}1.5: block_rq_issue: 8,0 R 0 () 100 + 8\n";
        let events: Vec<_> = scan_events(text).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, 1.5);
        assert_eq!(events[0].sector, 100);

        let line = "1.0: block_rq_issue: 8,\u{0663} R 0 () 100 + 8";
        assert!(parse_block_rq_line(line).is_none());
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let first = parse_trace(READ_LINE);
        let second = parse_trace(READ_LINE);
        assert_eq!(first, second);
        assert_eq!(first.values().map(Vec::len).sum::<usize>(), 1);
    }

    #[test]
    fn test_grouping_key_for_example_line() {
        let grouping = parse_trace(READ_LINE);
        let key = SeriesKey::new(Device::new(8, 0), OperationCategory::Read);
        assert_eq!(grouping[&key].len(), 1);
    }

    #[test]
    fn test_empty_and_binary_input() {
        assert!(parse_trace("").is_empty());
        let garbage = String::from_utf8_lossy(&[0xff, 0x00, 0x13, 0x88, 0xfe]).into_owned();
        assert!(parse_trace(&garbage).is_empty());
    }
}
