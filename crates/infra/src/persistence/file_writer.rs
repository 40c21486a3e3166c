use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, truncating any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Write `text` to `path` in one pass. Not atomic: an interrupted write leaves a partial file.
    pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(text.as_bytes())?;
        w.flush()
    }
}
