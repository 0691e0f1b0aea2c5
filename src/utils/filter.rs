use crate::parsers::parse_trace;
use crate::processors::TraceGrouping;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 입력 앞부분의 숫자만 사용 ("2.5s" -> 2.5)
    static ref LEADING_FLOAT_RE: Regex =
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap();
}

/// Optional timestamp bounds (seconds, inclusive on both sides).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl TimeWindow {
    // NaN/inf 경계는 "경계 없음"으로 처리
    pub fn new(start: Option<f64>, end: Option<f64>) -> Self {
        TimeWindow {
            start: start.filter(|v| v.is_finite()),
            end: end.filter(|v| v.is_finite()),
        }
    }

    /// Build a window from raw text inputs. Empty or non-numeric input means no bound.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        TimeWindow::new(parse_bound(start), parse_bound(end))
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, time: f64) -> bool {
        if let Some(start) = self.start {
            if time < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if time > end {
                return false;
            }
        }
        true
    }
}

fn parse_bound(input: &str) -> Option<f64> {
    let m = LEADING_FLOAT_RE.find(input.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

/// Re-parse `raw_text` and keep only events inside `window`.
///
/// Always starts from the raw text, so applying a new window never compounds
/// a previous one. Series left with no events are dropped.
pub fn filter_trace(raw_text: &str, window: &TimeWindow) -> TraceGrouping {
    filter_grouping(parse_trace(raw_text), window)
}

pub fn filter_grouping(grouping: TraceGrouping, window: &TimeWindow) -> TraceGrouping {
    // 필터가 활성화되지 않은 경우 원본 데이터 반환
    if !window.is_active() {
        return grouping;
    }

    grouping
        .into_iter()
        .filter_map(|(key, events)| {
            let kept: Vec<_> = events
                .into_iter()
                .filter(|event| window.contains(event.time))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some((key, kept))
            }
        })
        .collect()
}
