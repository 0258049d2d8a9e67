use std::io;
use std::path::{Path, PathBuf};

/// A text-bearing host element
pub trait Surface {
    /// Read the current text
    fn read_text(&mut self) -> io::Result<String>;

    /// Replace the whole text
    fn replace_text(&mut self, text: &str) -> io::Result<()>;

    /// Human-readable name for logs
    fn describe(&self) -> String;
}

/// A file on disk
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Surface for FileSurface {
    fn read_text(&mut self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }

    fn replace_text(&mut self, text: &str) -> io::Result<()> {
        std::fs::write(&self.path, text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory text
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    text: String,
}

impl MemorySurface {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Surface for MemorySurface {
    fn read_text(&mut self) -> io::Result<String> {
        Ok(self.text.clone())
    }

    fn replace_text(&mut self, text: &str) -> io::Result<()> {
        self.text = text.to_string();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
