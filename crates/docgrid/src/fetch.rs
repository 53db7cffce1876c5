//! Document sources: a blocking HTTP GET, or a file on disk.
//!
//! The HTTP source makes exactly one request. There is no retry and no
//! timeout beyond what reqwest applies by default; redirects follow the
//! client's default policy.

use std::path::{Path, PathBuf};

use crate::types::{DocGridError, DocGridResult};

/// Something that can produce the raw text of a document.
pub trait DocumentSource {
    /// Fetch the whole document as text.
    fn fetch(&self) -> DocGridResult<String>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

/// Fetches a document with a single blocking HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self) -> DocGridResult<String> {
        let network = |source| DocGridError::Network {
            url: self.url.clone(),
            source,
        };

        let resp = self.client.get(&self.url).send().map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DocGridError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(network)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads a document from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> DocGridResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
