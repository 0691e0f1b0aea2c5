use crate::models::{RegionStats, Series, SizeHistogram};
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

fn write_json<T: Serialize + ?Sized>(value: &T, filename: &str) -> Result<(), Box<dyn Error>> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    Ok(())
}

pub fn save_series_json(series: &[Series], output_prefix: &str) -> Result<String, Box<dyn Error>> {
    let filename = format!("{output_prefix}_series.json");
    write_json(series, &filename)?;
    Ok(filename)
}

pub fn save_histogram_json(
    hist: &SizeHistogram,
    output_prefix: &str,
) -> Result<String, Box<dyn Error>> {
    let filename = format!("{output_prefix}_histogram.json");
    write_json(hist, &filename)?;
    Ok(filename)
}

pub fn save_region_json(stats: &RegionStats, output_prefix: &str) -> Result<String, Box<dyn Error>> {
    let filename = format!("{output_prefix}_region.json");
    write_json(stats, &filename)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_trace;
    use crate::processors::{build_series, build_size_histogram};

    #[test]
    fn test_series_json_shape() {
        let series = build_series(&parse_trace("1.5: block_rq_issue: 8,0 W 0 () 64 + 16"));
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json[0]["label"], "8,0 Write");
        assert_eq!(json[0]["pointStyle"], "circle");
        assert_eq!(json[0]["backgroundColor"], "#3b82f6");
        assert_eq!(json[0]["showLine"], false);
        assert_eq!(json[0]["data"][0]["y"], 64);
        assert_eq!(json[0]["data"][0]["sizeKB"], 8.0);
    }

    #[test]
    fn test_histogram_json_keys() {
        let hist = build_size_histogram(&parse_trace("1.5: block_rq_issue: 8,0 R 0 () 0 + 8"));
        let json = serde_json::to_value(&hist).unwrap();
        assert_eq!(json["readCount"]["4"], 1);
        assert_eq!(json["writeCount"]["256"], 0);
        assert_eq!(json["bins"][6], 256);
    }
}
