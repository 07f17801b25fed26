//! Record sources. The [`RecordSource`] trait abstracts where animal
//! records come from so the pipeline does not care whether it is reading a
//! local JSON dump or querying the remote lookup API.

use crate::error::Result;
use crate::model::Animal;
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub trait RecordSource {
    /// Fetch the records for a free-text name query. An empty result is
    /// legal and means the query matched nothing.
    fn fetch(&self, query: &str) -> Result<Vec<Animal>>;
}

/// Reads a JSON array of records from a local file. The query is ignored;
/// the file is the whole data set.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn fetch(&self, _query: &str) -> Result<Vec<Animal>> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Queries the remote animal lookup API with a single blocking GET.
/// The API key is injected by the caller; this type never reads the
/// environment itself.
pub struct ApiSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiSource {
    pub fn new<U: Into<String>, K: Into<String>>(base_url: U, api_key: K) -> Result<Self> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl RecordSource for ApiSource {
    fn fetch(&self, query: &str) -> Result<Vec<Animal>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", query)])
            .header("X-Api-Key", &self.api_key)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}
