// src/submodule/download.rs
// =============================================================================
// This module downloads a repository snapshot from GitHub.
//
// Strategy:
// - Build the fixed archive URL for the repository's master branch
// - GET it with reqwest and buffer the whole body in memory
// - The body is binary (a zip file), so we use .bytes() instead of .text()
//
// GitHub redirects /archive/master.zip to codeload.github.com; reqwest
// follows redirects by default so we do not handle them specially.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// =============================================================================

use reqwest::Client;

use crate::submodule::error::FetchError;

// Builds the download URL for a repository's master branch snapshot
//
// Example:
//   archive_url("tobspr", "P3DModuleBuilder")
//     -> "https://github.com/tobspr/P3DModuleBuilder/archive/master.zip"
pub fn archive_url(author: &str, module: &str) -> String {
    format!("https://github.com/{}/{}/archive/master.zip", author, module)
}

// Downloads the archive for the given author/module, fully buffered
//
// Parameters:
//   client: reqwest HTTP client
//   author: GitHub owner name, used verbatim in the URL
//   module: repository name, used verbatim in the URL
//
// Returns: the raw zip bytes, or FetchError::Fetch if the transport fails
// or the server answers with a non-success status
pub async fn download_archive(
    client: &Client,
    author: &str,
    module: &str,
) -> Result<Vec<u8>, FetchError> {
    let url = archive_url(author, module);
    println!("Fetching: {}", url);

    let response = client.get(&url).send().await.map_err(|e| FetchError::Fetch {
        url: url.clone(),
        reason: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(FetchError::Fetch {
            url,
            reason: format!("HTTP {}", response.status()),
        });
    }

    let body = response.bytes().await.map_err(|e| FetchError::Fetch {
        url: url.clone(),
        reason: e.to_string(),
    })?;

    Ok(body.to_vec())
}
