//! Atomic replacement of the seed data file.
//!
//! The encoded records land in a hidden sibling named after the target, are
//! synced, and are then renamed over the target. A reader of the output file
//! therefore sees either the previous seed data or the complete new set.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::OutputError;

static STAGING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `path` inside `dir` with `contents`.
///
/// `path` must be a bare file name relative to `dir`.
pub(crate) fn replace_file(
    dir: &Dir,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), OutputError> {
    let file_name = bare_file_name(path)?;
    let staging = staging_name(file_name);

    write_staging_file(dir, &staging, path, contents)?;
    promote_staging_file(dir, &staging, file_name, path)?;
    // Best effort; the rename has already landed.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));

    Ok(())
}

fn bare_file_name(path: &Utf8Path) -> Result<&str, OutputError> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(file_name)), None) => Ok(file_name),
        _ => Err(OutputError::InvalidPath {
            path: path.to_path_buf(),
        }),
    }
}

fn staging_name(file_name: &str) -> String {
    let counter = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.{}.{nanos}.{counter}.partial", std::process::id())
}

fn write_staging_file(
    dir: &Dir,
    staging: &str,
    target: &Utf8Path,
    contents: &str,
) -> Result<(), OutputError> {
    let failed = |err: io::Error| OutputError::WriteError {
        path: target.with_file_name(staging),
        message: format!("could not stage seed data: {err}"),
    };
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(staging, &options).map_err(failed)?;

    if let Err(err) = file.write_all(contents.as_bytes()).and_then(|()| file.sync_all()) {
        drop(file);
        drop(dir.remove_file(staging));
        return Err(failed(err));
    }
    Ok(())
}

fn promote_staging_file(
    dir: &Dir,
    staging: &str,
    file_name: &str,
    target: &Utf8Path,
) -> Result<(), OutputError> {
    rename_over(dir, staging, file_name).map_err(|err| {
        drop(dir.remove_file(staging));
        OutputError::WriteError {
            path: target.to_path_buf(),
            message: format!("could not replace previous seed data: {err}"),
        }
    })
}

#[cfg(windows)]
fn rename_over(dir: &Dir, staging: &str, file_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(file_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(staging, dir, file_name)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, staging: &str, file_name: &str) -> io::Result<()> {
    dir.rename(staging, dir, file_name)
}
