//! Convert command implementation for the route processor CLI
//!
//! This module contains the complete conversion workflow including
//! configuration resolution, report parsing, and output writing.

use super::shared::{ConversionStats, create_spinner, read_report, setup_logging, write_output};
use crate::app::services::report_parser::{ParseOutcome, parse_report_bytes};
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::config::{Config, InputSource};
use crate::{Error, Result};
use indicatif::HumanDuration;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Convert command runner for the route processor
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and resolve configuration
/// 2. Read the raw report from file or stdin
/// 3. Parse it into CSV and diagnostic log strings
/// 4. Write outputs and generate summary statistics
pub fn run_convert(args: ConvertArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting route report conversion");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Resolve run configuration from CLI arguments
    let config = build_configuration(&args);
    debug!("Resolved configuration: {:?}", config);
    config.validate()?;

    info!("Reading route report from {}", config.input.describe());

    let spinner = if args.show_progress() {
        Some(create_spinner("Parsing route report..."))
    } else {
        None
    };

    let raw = read_report(&config.input)?;
    let outcome = parse_report_bytes(&raw);

    if let Some(pb) = &spinner {
        pb.finish_with_message(format!(
            "Scanned {} lines, extracted {} routes",
            outcome.stats.lines_scanned, outcome.stats.records_extracted
        ));
    }

    let mut stats = ConversionStats::from_parse_stats(&outcome.stats);

    if config.write_to_stdout {
        emit_to_stdout(&outcome);
    } else {
        write_outputs(&config, &outcome, &mut stats)?;
    }

    // A parse that could not even split the input still produced a
    // diagnostic log above; surface the failure after preserving it.
    if outcome.stats.aborted {
        error!("Conversion aborted: input content could not be split into lines");
        return Err(Error::input_split(
            "Input content could not be split into scannable lines; see the diagnostic log",
        ));
    }

    if outcome.stats.errors_logged > 0 {
        warn!(
            "Diagnostic log contains {} error entries",
            outcome.stats.errors_logged
        );
    }

    stats.processing_time = start_time.elapsed();

    // Generate final report, keeping stdout clean in --stdout mode
    if !args.to_stdout {
        generate_final_report(&args, &stats)?;
    }

    Ok(stats)
}

/// Build the run configuration from convert arguments
fn build_configuration(args: &ConvertArgs) -> Config {
    let mut config = match &args.input_path {
        Some(path) => Config::from_file(path.clone()),
        None => Config::from_stdin(),
    };

    if let Some(path) = &args.csv_output {
        config = config.with_csv_output(path.clone());
    }
    if let Some(path) = &args.log_output {
        config = config.with_log_output(path.clone());
    }
    if args.force_overwrite {
        config = config.with_force_overwrite();
    }
    if args.to_stdout {
        config = config.with_stdout_output();
    }

    config
}

/// Print the CSV to stdout and the diagnostic log to stderr
fn emit_to_stdout(outcome: &ParseOutcome) {
    print!("{}", outcome.csv);
    eprint!("{}", outcome.log);
}

/// Write the CSV and diagnostic log files and record their sizes
fn write_outputs(
    config: &Config,
    outcome: &ParseOutcome,
    stats: &mut ConversionStats,
) -> Result<()> {
    // Overwrite prompts need stdin, which a stdin-fed report already consumed
    let interactive = matches!(config.input, InputSource::File(_));

    let csv_path = config.resolved_csv_path();
    let csv_size = write_output(&csv_path, &outcome.csv, config.force_overwrite, interactive)?;
    info!("CSV output written to: {}", csv_path.display());

    let log_path = config.resolved_log_path();
    let log_size = write_output(&log_path, &outcome.log, config.force_overwrite, interactive)?;
    info!("Diagnostic log written to: {}", log_path.display());

    stats.output_sizes.push((display_name(&csv_path), csv_size));
    stats.output_sizes.push((display_name(&log_path), log_size));

    Ok(())
}

/// Short file name used in the summary's output listing
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Generate final conversion report
fn generate_final_report(args: &ConvertArgs, stats: &ConversionStats) -> Result<()> {
    info!("Generating final report");

    match args.output_format {
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => generate_json_report(stats),
        OutputFormat::Csv => generate_csv_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ConversionStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);
    let total_size = ConversionStats::format_size(stats.total_output_size());

    println!("\n🎉 Route Report Conversion Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Conversion Summary:");
    println!("   • Lines scanned: {}", stats.lines_scanned);
    println!("   • Route headers recognized: {}", stats.headers_recognized);
    println!("   • Routes extracted: {}", stats.routes_extracted);
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if stats.warnings_logged > 0 {
        println!("⚠️  Warnings logged: {}", stats.warnings_logged);
    }

    if stats.errors_logged > 0 {
        println!("⚠️  Errors logged: {}", stats.errors_logged);
    }

    if !stats.output_sizes.is_empty() {
        println!("\n📁 Output Files:");
        for (filename, size) in &stats.output_sizes {
            println!("   • {}: {}", filename, ConversionStats::format_size(*size));
        }
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ConversionStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "lines_scanned": stats.lines_scanned,
        "headers_recognized": stats.headers_recognized,
        "headers_rejected": stats.headers_rejected,
        "routes_extracted": stats.routes_extracted,
        "warnings_logged": stats.warnings_logged,
        "errors_logged": stats.errors_logged,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "total_output_size_bytes": stats.total_output_size(),
        "output_files": stats.output_sizes.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&json_stats).unwrap());
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(stats: &ConversionStats) -> Result<()> {
    println!("metric,value");
    println!("lines_scanned,{}", stats.lines_scanned);
    println!("headers_recognized,{}", stats.headers_recognized);
    println!("headers_rejected,{}", stats.headers_rejected);
    println!("routes_extracted,{}", stats.routes_extracted);
    println!("warnings_logged,{}", stats.warnings_logged);
    println!("errors_logged,{}", stats.errors_logged);
    println!(
        "processing_time_seconds,{}",
        stats.processing_time.as_secs_f64()
    );
    println!("total_output_size_bytes,{}", stats.total_output_size());

    Ok(())
}
