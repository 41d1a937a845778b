use anyhow::Result;
use dread_analysis::{analyze_export, AnalyzerOptions};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

// Simple CLI without clap
fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_secs(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Dread Analysis v{}", dread_analysis::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        println!("Dread Analysis v{}", dread_analysis::VERSION);
        println!("\nUsage:");
        println!(
            "  {} <EXPORT_PATH> [--output PATH] [--function NAME_OR_ADDR] [--strict-version] [--force-rename] [--force-reanalysis]",
            args[0]
        );
        println!("  {} --version", args[0]);
        println!("\nOptions:");
        println!("  --output, -o PATH        Save the report to the specified file path");
        println!("  --function, -f NAME      Only report the named function (symbol or hex entry address)");
        println!("  --strict-version         Do not treat unfingerprinted builds as compatible");
        println!("  --force-rename           Mark symbols for renaming even over user-defined names");
        println!("  --force-reanalysis       Re-analyze even if results already exist");
        println!("  --version, -v            Show version information");
        return Ok(());
    }

    let export_path = PathBuf::from(&args[1]);

    // Parse optional arguments
    let mut output_path = None;
    let mut function_filter: Option<String> = None;
    let mut options = AnalyzerOptions::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    println!("Error: Missing value for --output");
                    return Ok(());
                }
            }
            "--function" | "-f" => {
                if i + 1 < args.len() {
                    function_filter = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    println!("Error: Missing value for --function");
                    return Ok(());
                }
            }
            "--strict-version" => {
                options.assume_unknown_compatible = false;
                i += 1;
            }
            "--force-rename" => {
                options.force_rename = true;
                i += 1;
            }
            "--force-reanalysis" => {
                options.force_reanalysis = true;
                i += 1;
            }
            other => {
                println!("Error: Unknown option: {}", other);
                return Ok(());
            }
        }
    }

    let mut report = analyze_export(&export_path, options, output_path.as_deref())?;

    match report.version.as_deref() {
        Some(version) => println!("Identified build: {}", version),
        None => println!("Unrecognized build; only version-independent routines resolved"),
    }

    if let Some(filter) = function_filter {
        report
            .functions
            .retain(|f| f.name.as_deref() == Some(filter.as_str()) || f.entry == filter);
        if report.functions.is_empty() {
            println!("No function named {} in the export", filter);
            return Ok(());
        }
    }

    if output_path.is_none() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
