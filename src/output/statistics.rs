use crate::log;
use crate::models::{RegionSelection, RegionStats, Series, SizeHistogram};

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub fn print_trace_summary(series: &[Series], hist: &SizeHistogram) {
    let total: usize = series.iter().map(|s| s.data.len()).sum();
    log!("총 요청 수: {}", total);
    log!("시리즈 수: {}", series.len());

    if let (Some(start), Some(end)) = time_span(series) {
        log!("시간 범위: {:.6} s ~ {:.6} s ({:.3} s)", start, end, end - start);
    }

    log!("\n[시리즈별 요청 수]");
    log!("{:<20} {:<10} {:<8} {:>10}", "Series", "Marker", "Color", "Count");
    for s in series {
        log!(
            "{:<20} {:<10} {:<8} {:>10}",
            s.label,
            s.point_style.name(),
            s.background_color,
            s.data.len()
        );
    }

    print_size_histogram(hist);
}

pub fn print_size_histogram(hist: &SizeHistogram) {
    log!("\n[요청 크기 분포]");
    log!("{:>6} {:>10} {:>10} {:>10}", "Size", "Read", "Write", "Total");

    let labels = hist.bin_labels();
    let combined = hist.combined_counts();
    for (i, bin) in hist.bins.iter().enumerate() {
        log!(
            "{:>6} {:>10} {:>10} {:>10}",
            labels[i],
            hist.read_count.get(bin).copied().unwrap_or(0),
            hist.write_count.get(bin).copied().unwrap_or(0),
            combined[i]
        );
    }

    if hist.is_empty() {
        log!("Read/Write 요청 없음");
        return;
    }

    let reads = hist.total_reads();
    let writes = hist.total_writes();
    log!(
        "Read/Write 비율: {:.1}% / {:.1}% ({} / {})",
        ratio(reads, reads + writes),
        ratio(writes, reads + writes),
        reads,
        writes
    );
}

pub fn print_region_stats(region: &RegionSelection, stats: &RegionStats) {
    log!(
        "\n[선택 영역 통계] time {} ~ {}, sector {} ~ {}",
        region.x_min,
        region.x_max,
        region.y_min,
        region.y_max
    );
    log!("Read Count: {}", stats.read_count);
    log!("Write Count: {}", stats.write_count);
    log!("Read Size: {} KB", stats.read_kb);
    log!("Write Size: {} KB", stats.write_kb);
    log!("(요청당 4KB 로 가정한 크기)");
}

fn time_span(series: &[Series]) -> (Option<f64>, Option<f64>) {
    let mut times = series.iter().flat_map(|s| s.data.iter().map(|p| p.x));
    let Some(first) = times.next() else {
        return (None, None);
    };
    let (min, max) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
    (Some(min), Some(max))
}
