// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every argument has a default matching the module builder update, so the
// normal invocation is simply `module-updater` with no flags at all. The
// flags exist to point the tool at a different repository or destination.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "module-updater",
    version = "0.1.0",
    about = "Downloads and extracts the module builder submodule from GitHub",
    long_about = "module-updater fetches a zip snapshot of a GitHub repository's master \
                  branch, extracts it into the destination directory (skipping ignored \
                  paths), and performs the project tidy-up steps."
)]
pub struct Cli {
    /// GitHub author/owner of the repository to fetch
    ///
    /// #[arg(long, default_value = ...)] creates an optional --author flag
    #[arg(long, default_value = "tobspr")]
    pub author: String,

    /// Name of the repository (module) to fetch
    #[arg(long, default_value = "P3DModuleBuilder")]
    pub module: String,

    /// Destination directory for the extracted files
    #[arg(long, default_value = ".")]
    pub dest: String,

    /// Path substring to skip during extraction (repeatable)
    ///
    /// Any file whose output path contains one of these substrings is not
    /// written. When no --ignore flags are given, the module builder
    /// ignore list is used.
    #[arg(long, value_name = "SUBSTRING")]
    pub ignore: Vec<String>,

    /// Output the extraction report in JSON format instead of a summary line
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// The ignore list for the module builder update: package markers and
// example/config files that the project provides its own versions of.
pub const DEFAULT_IGNORE: &[&str] = &[
    "__init__.py",
    "LICENSE",
    "README.md",
    "config.ini",
    "Source/ExampleClass.cpp",
    "Source/ExampleClass.h",
    "Source/ExampleClass.I",
];

impl Cli {
    /// Returns the ignore list to use: the --ignore flags if any were
    /// given, otherwise the default module builder list
    pub fn ignore_list(&self) -> Vec<String> {
        if self.ignore.is_empty() {
            DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
        } else {
            self.ignore.clone()
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why defaults instead of required arguments?
//    - This tool is run as a one-shot setup step with no flags
//    - Defaults keep that invocation working while allowing overrides
//
// 2. What is Vec<String> in a clap struct?
//    - A repeatable flag: --ignore a --ignore b collects ["a", "b"]
//    - An empty Vec means the flag was never passed
//
// 3. What is a &[&str] constant?
//    - A slice of string literals, baked into the binary
//    - We convert to Vec<String> only when the caller needs owned values
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_needs_no_flags() {
        let cli = Cli::parse_from(["module-updater"]);
        assert_eq!(cli.author, "tobspr");
        assert_eq!(cli.module, "P3DModuleBuilder");
        assert_eq!(cli.dest, ".");
        assert!(!cli.json);
        assert_eq!(cli.ignore_list().len(), DEFAULT_IGNORE.len());
    }

    #[test]
    fn test_ignore_flags_replace_defaults() {
        let cli = Cli::parse_from(["module-updater", "--ignore", "docs/", "--ignore", ".md"]);
        assert_eq!(cli.ignore_list(), vec!["docs/".to_string(), ".md".to_string()]);
    }
}
