//! Full collection export

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

/// Export file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// File name the backend suggests for this format
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Json => "eemee-export.json",
            Self::Csv => "eemee-export.csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(Error::validation(format!("unknown export format: {other}"))),
        }
    }
}

/// A downloaded export
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub content_type: Option<String>,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Write the export to disk and return the path written.
    ///
    /// When `target` is a directory the server's file name is used inside it.
    pub async fn save(&self, target: &Path) -> Result<PathBuf, Error> {
        let path = if tokio::fs::metadata(target).await.map(|m| m.is_dir()).unwrap_or(false) {
            target.join(&self.file_name)
        } else {
            target.to_path_buf()
        };
        tokio::fs::write(&path, &self.bytes).await?;
        info!("Wrote {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}

/// Client for the export endpoint
pub struct ExportClient {
    client: Client,
    options: ClientOptions,
}

impl ExportClient {
    /// Create a new ExportClient
    pub(crate) fn new(client: Client, options: ClientOptions) -> Self {
        Self { client, options }
    }

    /// Download every phrase in the given format
    pub async fn download(&self, format: ExportFormat) -> Result<ExportFile, Error> {
        let path = format!("/api/export?format={}", format);
        let raw = Fetch::get(&self.client, &self.options, &path)
            .execute_raw()
            .await?;

        let file_name = raw
            .content_disposition
            .as_deref()
            .and_then(attachment_file_name)
            .unwrap_or_else(|| format.default_file_name().to_string());

        Ok(ExportFile {
            format,
            content_type: raw.content_type,
            file_name,
            bytes: raw.bytes,
        })
    }
}

/// Extract `filename` from a `Content-Disposition: attachment; filename="..."` value
fn attachment_file_name(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
