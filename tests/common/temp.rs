use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory removed on drop.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let inner = tempfile::Builder::new()
            .prefix(&format!("modern_cli_{prefix}_"))
            .tempdir()
            .unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn write_file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(self.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
