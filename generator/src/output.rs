use std::{
    io::{BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::error::LutError;

/// Writes a file by filling a temporary sibling and renaming it over `path`.
/// Readers see either the previous file or the complete new one. On any error the
/// temporary file is dropped and removed, leaving `path` untouched.
pub fn write_atomically<F>(path: &Path, write_contents: F) -> Result<u64, LutError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(directory).map_err(|e| LutError::io(directory, e))?;

    let mut writer = BufWriter::new(temp_file);
    write_contents(&mut writer).map_err(|e| LutError::io(path, e))?;

    let temp_file = writer
        .into_inner()
        .map_err(|e| LutError::io(path, e.into_error()))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| LutError::io(path, e))?;

    let bytes_written = temp_file
        .as_file()
        .metadata()
        .map_err(|e| LutError::io(path, e))?
        .len();

    temp_file
        .persist(path)
        .map_err(|e| LutError::io(path, e.error))?;

    Ok(bytes_written)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.gen.rs");

        let written = write_atomically(&path, |out| out.write_all(b"pub const A: u32 = 1;\n")).unwrap();

        assert_eq!(written, 22);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "pub const A: u32 = 1;\n");
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.gen.rs");
        std::fs::write(&path, "old").unwrap();

        write_atomically(&path, |out| out.write_all(b"new")).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_failed_write_leaves_destination_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.gen.rs");
        std::fs::write(&path, "old").unwrap();

        let result = write_atomically(&path, |out| {
            out.write_all(b"partial")?;
            Err(io::Error::other("emitter failed"))
        });

        assert!(matches!(result, Err(LutError::Io { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
        // Only the original file is left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("table.gen.rs");

        let result = write_atomically(&path, |out| out.write_all(b"data"));

        assert!(matches!(result, Err(LutError::Io { .. })));
        assert!(!path.exists());
    }
}
