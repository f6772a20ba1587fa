//! Canned [`PageSource`] for unit tests

use crate::crawler::fetcher::{FetchedPage, PageSource};
use crate::FetchError;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves fixed bodies by URL; unknown URLs answer 404
#[derive(Default)]
pub struct MockSource {
    pages: HashMap<String, Result<String, u16>>,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageSource for MockSource {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        match self.pages.get(url) {
            Some(Ok(body)) => Ok(FetchedPage {
                url: parsed,
                body: body.clone(),
            }),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
