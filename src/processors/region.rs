use crate::models::{OperationCategory, RegionSelection, RegionStats, Series};
use crate::utils::constants::REGION_KB_PER_EVENT;

/// Count read and write points of `series` that fall inside `region`.
///
/// KB totals are `count * 4`, not the sum of real request sizes.
pub fn aggregate_region(series: &[Series], region: &RegionSelection) -> RegionStats {
    let mut stats = RegionStats::default();

    for s in series {
        let counter = match s.category() {
            OperationCategory::Read => &mut stats.read_count,
            OperationCategory::Write => &mut stats.write_count,
            _ => continue,
        };
        *counter += s
            .data
            .iter()
            .filter(|p| region.contains(p.x, p.y))
            .count() as u64;
    }

    stats.read_kb = stats.read_count * REGION_KB_PER_EVENT;
    stats.write_kb = stats.write_count * REGION_KB_PER_EVENT;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_trace;
    use crate::processors::build_series;

    const TRACE: &str = "\
1234.500000: block_rq_issue: 8,0 R 0 () 1000 + 8
1234.600000: block_rq_issue: 0,0 W 0 () 1 + 16
1500.000000: block_rq_issue: 8,0 W 0 () 5000 + 256
1600.000000: block_rq_issue: 8,0 D 0 () 100 + 8
2500.000000: block_rq_issue: 8,16 R 0 () 100 + 8
";

    #[test]
    fn test_example_region() {
        let series = build_series(&parse_trace(TRACE));
        let stats = aggregate_region(&series, &RegionSelection::new(1000.0, 2000.0, 0.0, 2000.0));
        assert_eq!(
            stats,
            RegionStats {
                read_count: 1,
                write_count: 0,
                read_kb: 4,
                write_kb: 0,
            }
        );
    }

    #[test]
    fn test_kb_ignores_real_size() {
        let series = build_series(&parse_trace(TRACE));
        let stats = aggregate_region(&series, &RegionSelection::new(1400.0, 1550.0, 0.0, 1e9));
        assert_eq!(stats.write_count, 1);
        assert_eq!(stats.write_kb, 4);
    }

    #[test]
    fn test_all_encompassing_region_counts_every_read_write() {
        let series = build_series(&parse_trace(TRACE));
        let everything = RegionSelection::new(f64::MIN, f64::MAX, f64::MIN, f64::MAX);
        let stats = aggregate_region(&series, &everything);
        assert_eq!(stats.read_count, 2);
        assert_eq!(stats.write_count, 1);
    }

    #[test]
    fn test_empty_region_and_series() {
        assert_eq!(
            aggregate_region(&[], &RegionSelection::new(0.0, 1.0, 0.0, 1.0)),
            RegionStats::default()
        );
        let series = build_series(&parse_trace(TRACE));
        let inverted = RegionSelection::new(2000.0, 1000.0, 0.0, 2000.0);
        assert_eq!(aggregate_region(&series, &inverted), RegionStats::default());
    }
}
