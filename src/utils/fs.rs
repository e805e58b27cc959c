//! Filesystem helpers for whole-file copies.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Copy the regular files directly inside `src_dir` into `dst_dir`.
///
/// Non-recursive, mirroring the flat layout of the css/assets/meta
/// directories. A missing source directory copies nothing.
pub fn copy_dir_files(src_dir: &Path, dst_dir: &Path) -> Result<()> {
    if !src_dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(src_dir)
        .with_context(|| format!("Failed to read directory `{}`", src_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            let dst = dst_dir.join(entry.file_name());
            fs::copy(&path, &dst).with_context(|| {
                format!("Failed to copy `{}` to `{}`", path.display(), dst.display())
            })?;
        }
    }

    Ok(())
}

/// Copy `src` to `dst` if `src` exists. Returns whether a copy happened.
pub fn copy_if_present(src: &Path, dst: &Path) -> Result<bool> {
    if !src.is_file() {
        return Ok(false);
    }

    fs::copy(src, dst)
        .with_context(|| format!("Failed to copy `{}` to `{}`", src.display(), dst.display()))?;
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================
