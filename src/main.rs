use lbatrace::output::{
    print_region_stats, print_trace_summary, save_events_to_csv, save_histogram_json,
    save_histogram_to_csv, save_region_json, save_series_json,
};
use lbatrace::utils::{read_trace_file_async, Logger};
use lbatrace::*;
use std::env;
use std::io;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
struct AnalysisOptions {
    trace_file: String,
    output_prefix: String,
    window: TimeWindow,
    region: Option<RegionSelection>,
    export_csv: bool,
    export_json: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} [options] <trace_file> <output_prefix>  - Parse block_rq_issue trace and generate series/statistics");
    eprintln!("\nOptions:");
    eprintln!("  -s <time>    - Time window start in seconds (empty or non-numeric = no bound). Example: -s 1234.5");
    eprintln!("  -e <time>    - Time window end in seconds (empty or non-numeric = no bound). Example: -e 1240");
    eprintln!("  -r <region>  - Region stats for xmin,xmax,ymin,ymax (time, sector). Example: -r 1000,2000,0,2000");
    eprintln!("  --csv        - Export events and size histogram to CSV files");
    eprintln!("  --no-json    - Skip JSON export of series, histogram and region stats");
}

fn parse_args(args: &[String]) -> Result<AnalysisOptions, String> {
    let mut positional = Vec::new();
    let mut start = String::new();
    let mut end = String::new();
    let mut region = None;
    let mut export_csv = false;
    let mut export_json = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "-e" | "-r" => {
                let flag = args[i].as_str();
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{flag} option requires a value"))?;
                match flag {
                    "-s" => start = value.clone(),
                    "-e" => end = value.clone(),
                    _ => region = Some(RegionSelection::parse(value)?),
                }
                i += 2; // 옵션과 값을 건너뜀
            }
            "--csv" => {
                export_csv = true;
                i += 1;
            }
            "--no-json" => {
                export_json = false;
                i += 1;
            }
            other if other.starts_with("--") => {
                return Err(format!("Unknown option '{other}'"));
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    if positional.len() != 2 {
        return Err("Expected <trace_file> <output_prefix>".to_string());
    }
    let output_prefix = positional.pop().unwrap_or_default();
    let trace_file = positional.pop().unwrap_or_default();

    Ok(AnalysisOptions {
        trace_file,
        output_prefix,
        window: TimeWindow::from_inputs(&start, &end),
        region,
        export_csv,
        export_json,
    })
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("lbatrace");

    // 인자가 없으면 사용법 출력
    if args.len() <= 1 {
        eprintln!("Error: No arguments provided");
        print_usage(program);
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(program);
            return Ok(());
        }
    };

    Logger::init(&options.output_prefix);
    run(&options).await?;
    Logger::flush()
}

async fn run(options: &AnalysisOptions) -> io::Result<()> {
    let total_start = Instant::now();

    log!("\n[1/3] Reading trace file: {}", options.trace_file);
    let raw_text = match read_trace_file_async(&options.trace_file).await {
        Ok(text) => text,
        Err(e) => {
            log_error!("Failed to read '{}': {}", options.trace_file, e);
            return Err(e);
        }
    };
    log!("  {} bytes loaded", raw_text.len());

    log!("\n[2/3] Parsing block_rq_issue events...");
    let parse_start = Instant::now();
    // 히스토그램은 항상 전체 트레이스 기준
    let full = parse_trace(&raw_text);
    let hist = build_size_histogram(&full);
    let grouping = if options.window.is_active() {
        log!(
            "  Time window: {:?} ~ {:?}",
            options.window.start,
            options.window.end
        );
        filter_trace(&raw_text, &options.window)
    } else {
        full
    };
    let series = build_series(&grouping);
    log!(
        "  Parsed {} series in {:.3}s",
        series.len(),
        parse_start.elapsed().as_secs_f64()
    );

    print_trace_summary(&series, &hist);

    let region_stats = options.region.map(|region| {
        let stats = aggregate_region(&series, &region);
        print_region_stats(&region, &stats);
        stats
    });

    log!("\n[3/3] Writing outputs...");
    if options.export_json {
        report(save_series_json(&series, &options.output_prefix));
        report(save_histogram_json(&hist, &options.output_prefix));
        if let Some(stats) = &region_stats {
            report(save_region_json(stats, &options.output_prefix));
        }
    }
    if options.export_csv {
        report(save_events_to_csv(&grouping, &options.output_prefix));
        report(save_histogram_to_csv(&hist, &options.output_prefix));
    }

    log!(
        "\nDone in {:.3}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn report(result: Result<String, Box<dyn std::error::Error>>) {
    match result {
        Ok(filename) => log!("  Saved {}", filename),
        Err(e) => log_error!("  Export failed: {}", e),
    }
}
