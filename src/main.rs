use clap::Parser;
use route_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Route Processor - Legacy Route Report Converter");
    println!("===============================================");
    println!();
    println!("Convert the semi-structured route reports dumped by a legacy airline");
    println!("scheduling system into flat CSV files plus a full diagnostic log.");
    println!();
    println!("USAGE:");
    println!("    route-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a route report into CSV and a diagnostic log (main command)");
    println!("    check       Parse a route report and show its diagnostics without writing files");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a report, writing january.csv and january.log beside it:");
    println!("    route-processor convert --input january.txt");
    println!();
    println!("    # Convert from stdin straight to stdout for piping:");
    println!("    cat january.txt | route-processor convert --stdout");
    println!();
    println!("    # Vet a report before converting it:");
    println!("    route-processor check --input january.txt --strict");
    println!();
    println!("    # Get help for specific commands:");
    println!("    route-processor convert --help");
    println!("    route-processor check --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    route-processor <COMMAND> --help");
}
