use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use memmap2::{Mmap, MmapOptions};

/// Opens a model file as the `Read + Seek` stream the loaders consume,
/// backed by a read-only memory map.
pub fn open_stream<P: AsRef<Path>>(path: P) -> Result<Cursor<Mmap>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("cannot open model file '{}'", path.display()))?;
    let map = unsafe { MmapOptions::new().map(&file) }
        .with_context(|| format!("cannot map model file '{}'", path.display()))?;
    Ok(Cursor::new(map))
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn stream_reads_file_contents() {
        let path = std::env::temp_dir().join("meshlib-open-stream.bin");
        std::fs::write(&path, b"MM\x0c\x00\x00\x00").unwrap();
        let mut stream = open_stream(&path).unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(buf, b"MM\x0c\x00\x00\x00");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = open_stream("does/not/exist.3ds").unwrap_err();
        assert!(err.to_string().contains("cannot open model file"), "{err}");
    }
}
