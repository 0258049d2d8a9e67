use anyhow::Context;
use cleanse_watch::Surface;
use std::io;

/// The system clipboard as a watch / redact surface
pub struct ClipboardSurface {
    clipboard: arboard::Clipboard,
}

impl ClipboardSurface {
    pub fn new() -> anyhow::Result<Self> {
        let clipboard = arboard::Clipboard::new().context("System clipboard unavailable")?;
        Ok(Self { clipboard })
    }
}

impl Surface for ClipboardSurface {
    fn read_text(&mut self) -> io::Result<String> {
        self.clipboard.get_text().map_err(io::Error::other)
    }

    fn replace_text(&mut self, text: &str) -> io::Result<()> {
        self.clipboard.set_text(text).map_err(io::Error::other)
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}
