// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Download and extract the requested module archive
// 3. Print the extraction report (summary line or JSON)
// 4. Run the tidy-up steps (clear __init__.py, swap in the gitignore)
// 5. Exit with proper code (0 = success, 1 = corrupt archive or
//    filesystem failure, 2 = download failure, 3 = not a zip)
//
// Rust concepts used:
// - async/await: The download is network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to map failures to exit codes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod submodule; // src/submodule/ - download and extraction logic
mod tidy; // src/tidy.rs - post-update cleanup steps

// Import items we need from our modules
use std::path::Path;

use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unexpected error (e.g. a tidy step failing) prints its
            // chain and exits 1, like any other local failure
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = module updated
//   Ok(1) = archive failed its checksum verification
//   Ok(2) = archive could not be downloaded
//   Ok(3) = response body was not a zip archive
//   Err = filesystem or tidy-step failure
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let ignore_list = cli.ignore_list();

    println!("🔄 Updating module: {}/{}", cli.author, cli.module);

    let report =
        match submodule::fetch_and_extract(&cli.author, &cli.module, &cli.dest, &ignore_list)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return Ok(e.exit_code());
            }
        };

    print_report(&report, cli.json)?;

    // The update finishes with two fixed cleanup steps in the destination
    let dest = Path::new(&cli.dest);
    tidy::clear_init_file(dest)?;
    tidy::replace_gitignore(dest)?;

    Ok(0)
}

// Prints the extraction report either as a summary or as JSON
// Parameters:
//   report: the counters from the extraction
//   json: whether to output JSON format
fn print_report(report: &submodule::ExtractReport, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        println!(
            "✅ Extracted {} file(s) and {} directory(ies), skipped {} ignored file(s)",
            report.files_written, report.dirs_created, report.files_skipped
        );
    }
    Ok(())
}
