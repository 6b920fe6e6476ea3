// src/submodule/error.rs
// =============================================================================
// The error type for the fetch-and-extract pipeline.
//
// Each fatal condition gets its own variant so the driver can map it to a
// distinct process exit code. Skipping an ignored file is NOT an error -
// that is normal control flow inside the extraction loop.
//
// Rust concepts:
// - Enums: One type, several distinct failure shapes
// - thiserror: Derives std::error::Error and Display for us
// =============================================================================

use std::io;

// Everything that can go fatally wrong while fetching and extracting a
// submodule archive
//
// #[derive(thiserror::Error)] generates the Display impl from the
// #[error(...)] strings and wires up the source() chain
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The archive could not be downloaded (transport failure or a
    /// non-success HTTP status)
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The response body is not a parseable zip archive
    #[error("invalid zip file: {reason}")]
    ArchiveFormat { reason: String },

    /// An entry in the archive failed its checksum verification
    #[error("invalid zip file checksums (first bad entry: {entry})")]
    ArchiveIntegrity { entry: String },

    /// A filesystem operation failed while preparing or writing output
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl FetchError {
    /// Maps the error to the process exit status the driver should use
    ///
    /// 1 = corrupt archive or filesystem failure
    /// 2 = download failure
    /// 3 = body is not a zip archive
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::Fetch { .. } => 2,
            FetchError::ArchiveFormat { .. } => 3,
            FetchError::ArchiveIntegrity { .. } => 1,
            FetchError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let fetch = FetchError::Fetch {
            url: "https://github.com/a/b/archive/master.zip".to_string(),
            reason: "connection refused".to_string(),
        };
        let format = FetchError::ArchiveFormat {
            reason: "invalid Zip archive".to_string(),
        };
        let integrity = FetchError::ArchiveIntegrity {
            entry: "b-master/file.txt".to_string(),
        };

        assert_eq!(fetch.exit_code(), 2);
        assert_eq!(format.exit_code(), 3);
        assert_eq!(integrity.exit_code(), 1);
    }

    #[test]
    fn test_io_errors_share_the_integrity_code() {
        let err = FetchError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_the_reason() {
        let err = FetchError::Fetch {
            url: "https://github.com/a/b/archive/master.zip".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("https://github.com/a/b/archive/master.zip"));
        assert!(message.contains("HTTP 404"));
    }
}
