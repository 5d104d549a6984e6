//! Filesystem helpers for catalog input and document output, built on
//! `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Write};
use std::path::Component;

/// Open an existing UTF-8 file path for reading.
///
/// # Errors
/// Propagates the I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Replace the contents of `path` with `contents`, creating missing parent
/// directories first.
///
/// The bytes are written to a staging file beside `path` and renamed over it
/// once complete, so readers see either the previous file or the new one. A
/// failed write removes the staging file and leaves `path` untouched.
///
/// # Errors
/// Propagates the I/O error when a directory cannot be created or the staging
/// file cannot be written or renamed into place.
pub fn replace_utf8_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    let staging = staging_name(&name);
    let outcome = write_staged(&dir, &staging, contents)
        .and_then(|()| dir.rename(&staging, &dir, &name));
    if outcome.is_err() {
        // The staging file may not exist if creating it failed.
        dir.remove_file(&staging).ok();
    }
    outcome
}

fn staging_name(name: &str) -> String {
    format!(".{name}.partial")
}

fn write_staged(dir: &fs_utf8::Dir, staging: &str, contents: &[u8]) -> io::Result<()> {
    let mut file = dir.create(staging)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
/// Propagates the I/O error when the parent directory or the entry cannot be
/// inspected, including `NotFound` for a missing entry.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = split_root(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Split `parent` into an ambient base directory and the path below it, so
/// absolute paths can be created through a capability handle.
fn split_root(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let base = match parent.as_std_path().components().next() {
        // Windows drive or UNC prefix.
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR)
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if base == "." {
        parent.to_path_buf()
    } else {
        parent
            .strip_prefix(&base)
            .map_err(|_| io::Error::other(format!("failed to strip {base} from {parent}")))?
            .to_path_buf()
    };
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}
