// src/submodule/mod.rs
// =============================================================================
// This module downloads and extracts (sub-)modules from GitHub.
//
// Submodules:
// - download: Builds the archive URL and fetches the zip into memory
// - extract: Verifies the zip and writes its entries to disk
// - error: The FetchError type with its exit-code mapping
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod download;
mod error;
mod extract;

use std::fs;

use reqwest::Client;

// Re-export public items from submodules
pub use error::FetchError;
pub use extract::ExtractReport;

// Downloads a submodule from the given author and module name, and
// extracts all files which are not on the ignore list to the destination
//
// Parameters:
//   author: GitHub owner name
//   module: repository name (also determines the archive's path prefix)
//   dest: destination directory, created recursively if missing
//   ignore_list: substrings; output paths containing one are skipped
//
// Returns: the extraction counters, or the first fatal FetchError.
// The caller decides what to do with a failure - typically map it to a
// process exit code.
//
// Example:
//   fetch_and_extract("tobspr", "P3DModuleBuilder", ".", &ignore).await
pub async fn fetch_and_extract(
    author: &str,
    module: &str,
    dest: &str,
    ignore_list: &[String],
) -> Result<ExtractReport, FetchError> {
    // Make the destination directory, if it does not exist yet
    if !std::path::Path::new(dest).is_dir() {
        fs::create_dir_all(dest)?;
    }

    let client = Client::new();
    let data = download::download_archive(&client, author, module).await?;

    extract::extract_archive(&data, module, dest, ignore_list)
}
