// src/tidy.rs
// =============================================================================
// This module performs the two cleanup steps that follow a successful
// module builder update.
//
// Steps:
// 1. Truncate Scripts/__init__.py so the package imports cleanly without
//    carrying the upstream file (which the ignore list skipped anyway)
// 2. Replace the project's .gitignore with the prefab one shipped inside
//    the module: delete the old file, then rename prefab.gitignore onto it
//
// Rust concepts:
// - std::fs: Filesystem operations (write, remove_file, rename)
// - ErrorKind: Distinguishing "file not found" from real failures
// =============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

// Writes an empty Scripts/__init__.py under the destination
//
// Truncates the file if it exists, creates it otherwise. Fails if the
// Scripts directory itself is missing.
pub fn clear_init_file(dest: &Path) -> Result<()> {
    let init_file = dest.join("Scripts").join("__init__.py");
    fs::write(&init_file, "")
        .with_context(|| format!("could not clear {}", init_file.display()))?;
    Ok(())
}

// Replaces .gitignore with the prefab.gitignore from the extracted module
//
// The delete is best-effort: a missing .gitignore is fine, any other
// failure is not. The rename then must succeed.
pub fn replace_gitignore(dest: &Path) -> Result<()> {
    let target = dest.join(".gitignore");
    let prefab = dest.join("prefab.gitignore");

    match fs::remove_file(&target) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("could not remove {}", target.display()))
        }
    }

    fs::rename(&prefab, &target).with_context(|| {
        format!(
            "could not rename {} to {}",
            prefab.display(),
            target.display()
        )
    })?;

    Ok(())
}
