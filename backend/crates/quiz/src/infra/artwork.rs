//! Artwork Fetcher
//!
//! Downloads sprite images referenced by catalog records. Artwork requests
//! go to the image host directly and do not count against the catalog
//! rate limit.

use crate::application::config::QuizConfig;
use crate::domain::repository::ArtworkRepository;
use crate::error::QuizResult;
use platform::client::{build_http_client, fetch_bytes};

/// ArtworkRepository over plain HTTP
#[derive(Clone)]
pub struct HttpArtworkFetcher {
    http: reqwest::Client,
}

impl HttpArtworkFetcher {
    pub fn new(config: &QuizConfig) -> QuizResult<Self> {
        let http = build_http_client(&config.http_client_config())?;
        Ok(Self { http })
    }

    /// Reuse an existing client (shares its connection pool)
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl ArtworkRepository for HttpArtworkFetcher {
    async fn fetch_artwork(&self, url: &str) -> QuizResult<Vec<u8>> {
        Ok(fetch_bytes(&self.http, url).await?)
    }
}
