use crate::models::SizeHistogram;
use crate::processors::TraceGrouping;
use ::csv::Writer;
use std::error::Error;
use std::fs::File;
use std::io::Write;

/// CSV export of every grouped event, one row per event.
pub fn save_events_to_csv(grouping: &TraceGrouping, output_prefix: &str) -> Result<String, Box<dyn Error>> {
    let filename = format!("{output_prefix}_events.csv");
    let file = File::create(&filename)?;
    write_events_csv(grouping, file)?;
    Ok(filename)
}

pub fn write_events_csv<W: Write>(grouping: &TraceGrouping, out: W) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(out);

    writer.write_record([
        "time", "devmajor", "devminor", "flags", "category", "sector", "length", "size_kb",
    ])?;

    for (key, events) in grouping {
        for event in events {
            writer.write_record(&[
                event.time.to_string(),
                event.device.major.to_string(),
                event.device.minor.to_string(),
                event.flags.to_string(),
                key.category.to_string(),
                event.sector.to_string(),
                event.length.to_string(),
                event.size_kb.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// CSV export of the size histogram, one row per bin.
pub fn save_histogram_to_csv(hist: &SizeHistogram, output_prefix: &str) -> Result<String, Box<dyn Error>> {
    let filename = format!("{output_prefix}_histogram.csv");
    let file = File::create(&filename)?;
    write_histogram_csv(hist, file)?;
    Ok(filename)
}

pub fn write_histogram_csv<W: Write>(hist: &SizeHistogram, out: W) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["bin_kb", "read", "write", "total"])?;

    let labels = hist.bin_labels();
    for (i, bin) in hist.bins.iter().enumerate() {
        let read = hist.read_count.get(bin).copied().unwrap_or(0);
        let write = hist.write_count.get(bin).copied().unwrap_or(0);
        writer.write_record(&[
            labels[i].clone(),
            read.to_string(),
            write.to_string(),
            (read + write).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
