// src/submodule/extract.rs
// =============================================================================
// This module verifies and extracts the downloaded zip archive.
//
// Key functionality:
// - Opens the in-memory body as a zip (format errors surface here)
// - Verifies every entry's checksum BEFORE anything is written to disk
// - Walks the entries in listing order: directories are created, files are
//   copied unless their output path contains an ignore-list substring
// - Strips the '{module}-master' prefix GitHub puts on every entry so the
//   contents land directly under the destination
//
// Rust concepts:
// - std::io::Cursor: Treats an in-memory buffer as a seekable reader
// - io::copy: Stream-copies from any Read to any Write
// - Pattern matching: To classify entries as directories or files
// =============================================================================

use std::fs::{self, File};
use std::io::{self, Cursor, Read, Seek};
use std::path::Path;

use serde::Serialize;
use zip::ZipArchive;

use crate::submodule::error::FetchError;

// What happened during an extraction
//
// files_skipped covers ignore-list matches only; entries that reduce to an
// empty path after prefix stripping are counted nowhere
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    /// Number of files copied to the destination
    pub files_written: usize,
    /// Number of directory entries processed (created if absent)
    pub dirs_created: usize,
    /// Number of files skipped because of the ignore list
    pub files_skipped: usize,
}

// Extracts a downloaded archive into the destination directory
//
// Parameters:
//   data: the raw zip bytes, fully buffered
//   module: repository name, used to strip the '{module}-master' prefix
//   dest: destination directory (must already exist)
//   ignore_list: substrings; any OUTPUT path containing one is skipped
//
// Returns: the extraction counters, or the first fatal error.
// The integrity check runs over the whole archive first, so a corrupt
// archive fails before a single byte is written.
pub fn extract_archive(
    data: &[u8],
    module: &str,
    dest: &str,
    ignore_list: &[String],
) -> Result<ExtractReport, FetchError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|e| FetchError::ArchiveFormat {
            reason: e.to_string(),
        })?;

    verify_archive(&mut archive)?;

    let prefix = format!("{}-master", module);
    let dest = dest.trim_end_matches(['/', '\\']);

    let mut report = ExtractReport {
        files_written: 0,
        dirs_created: 0,
        files_skipped: 0,
    };

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| FetchError::ArchiveFormat {
            reason: e.to_string(),
        })?;

        // Strip the snapshot prefix and normalize separators so every
        // entry becomes a forward-slash path relative to the destination
        let rel_name = entry
            .name()
            .replace(&prefix, "")
            .replace('\\', "/")
            .trim_start_matches('/')
            .to_string();

        // The top-level snapshot directory reduces to an empty path
        if rel_name.is_empty() {
            continue;
        }

        let is_dir = rel_name.ends_with('/');
        let out_path = format!("{}/{}", dest, rel_name);

        if is_dir {
            if !Path::new(&out_path).is_dir() {
                fs::create_dir_all(&out_path)?;
            }
            report.dirs_created += 1;
        } else {
            // The ignore list matches against the full output path
            if ignore_list.iter().any(|pattern| out_path.contains(pattern.as_str())) {
                report.files_skipped += 1;
                continue;
            }

            // Directory entries normally precede their files, but some
            // archives omit them
            if let Some(parent) = Path::new(&out_path).parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }

            let mut output = File::create(&out_path)?;
            io::copy(&mut entry, &mut output)?;
            report.files_written += 1;
        }
    }

    Ok(report)
}

// Reads every entry to a sink so the zip layer checks each stored CRC
//
// The first entry whose bytes do not match their checksum produces
// FetchError::ArchiveIntegrity naming that entry
fn verify_archive<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<(), FetchError> {
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| FetchError::ArchiveFormat {
            reason: e.to_string(),
        })?;
        let name = entry.name().to_string();

        if io::copy(&mut entry, &mut io::sink()).is_err() {
            return Err(FetchError::ArchiveIntegrity { entry: name });
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why verify in a separate pass?
//    - Reading an entry is the only way the zip layer checks its CRC
//    - Doing it up front means a corrupt archive writes nothing at all
//    - The archive is in memory, so reading it twice costs no I/O
//
// 2. Why build output paths as strings instead of PathBuf::join?
//    - The ignore list matches against the textual output path, so the
//      separator must be '/' on every platform
//    - The filesystem APIs accept forward slashes on all supported hosts
//
// 3. What does io::copy do?
//    - Streams bytes from a reader to a writer in chunks
//    - Here: from the decompressing zip entry reader into the output file,
//      or into io::sink() (a writer that discards everything) to verify
// -----------------------------------------------------------------------------
