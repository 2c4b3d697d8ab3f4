//! I/O utility functions

use std::fs;
use std::io;
use std::path::Path;

/// Write bytes to `path` through a sibling temp file and a rename, so a
/// reader never sees a half-written file.
pub fn atomic_write_bytes(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
