//! Output formatting and display utilities

use crate::config::OutputConfig;
use crate::cookies::CookieRecord;
use crate::error::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Render cookies as a JSON array, two-space indented when `pretty`.
pub fn render_json(cookies: &[CookieRecord], pretty: bool) -> Result<String> {
    let mut rendered = if pretty {
        serde_json::to_string_pretty(cookies)?
    } else {
        serde_json::to_string(cookies)?
    };
    rendered.push('\n');
    Ok(rendered)
}

/// Output writer that handles file vs stdout
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Serialize `cookies` and write them to the configured destination.
    pub fn write_cookies(&self, cookies: &[CookieRecord]) -> Result<()> {
        let rendered = render_json(cookies, self.config.pretty)?;
        self.write(&rendered)
    }

    /// Write content to configured output
    pub fn write(&self, content: &str) -> Result<()> {
        if let Some(file_path) = &self.config.file {
            self.write_to_file(content, file_path)
        } else {
            self.write_to_stdout(content)
        }
    }

    fn write_to_file(&self, content: &str, file_path: &Path) -> Result<()> {
        let mut file = File::create(file_path)?;
        file.write_all(content.as_bytes())?;
        log::info!("Wrote cookies to {:?}", file_path);
        Ok(())
    }

    fn write_to_stdout(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
