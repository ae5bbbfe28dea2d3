//! Whole-file replacement for the master record and the vault file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::Result;

/// Write `contents` to `path` **atomically**.
///
/// 1. Create the parent directory if needed.
/// 2. Write to a temp file in the same directory (owner-only on Unix).
/// 3. Rename the temp file over the target path.
///
/// Readers never see a half-written file, and if anything fails before
/// the rename the previous content is left untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent)?;
        tracing::debug!(dir = %parent.display(), "created data directory");
    }

    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    // A leftover temp file would keep its old mode, so start fresh.
    if tmp_path.is_file() {
        fs::remove_file(&tmp_path)?;
    }

    // Create the temp file owner-only from the start (no window where the
    // contents are readable by others).
    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o600)
            .open(&tmp_path)?
    };

    #[cfg(not(unix))]
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)?;

    let written = file.write_all(contents).and_then(|()| file.sync_all());
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}
