use async_trait::async_trait;
use chrono::NaiveDate;
use nt_core::{Envelope, Error, Result};
use reqwest::Client;
use url::Url;

/// One page of the feed: `limit` articles starting at `offset` for `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub date: NaiveDate,
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn new(date: NaiveDate, limit: usize, offset: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::InvalidRequest(
                "page limit must be greater than zero".to_string(),
            ));
        }
        Ok(Self { date, limit, offset })
    }

    /// The request for the page right after this one.
    pub fn next(&self) -> Result<Self> {
        let offset = self.offset.checked_add(self.limit).ok_or_else(|| {
            Error::InvalidRequest(format!("offset overflow after {}", self.offset))
        })?;
        Ok(Self { offset, ..*self })
    }

    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches and decodes a single page. A `success: false` envelope is
    /// returned as-is; only transport and decode failures are errors here.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Envelope>;
}

/// Feed source backed by the JSON endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    endpoint: Url,
}

impl HttpFeedSource {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `<endpoint>?date=<YYYY-MM-DD>&limit=<n>&offset=<n>`
    pub fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("date", &request.iso_date())
            .append_pair("limit", &request.limit.to_string())
            .append_pair("offset", &request.offset.to_string());
        url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Envelope> {
        let url = self.page_url(request);
        tracing::debug!("GET {}", url);

        // The status code is not checked: the backend reports failures
        // through the envelope, and anything that is not JSON fails to decode.
        let body = self.client.get(url).send().await?.text().await?;
        let envelope = serde_json::from_str::<Envelope>(&body)?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 9).unwrap()
    }

    #[test]
    fn test_page_request_rejects_zero_limit() {
        assert!(matches!(
            PageRequest::new(date(), 0, 0),
            Err(Error::InvalidRequest(_))
        ));
        assert!(PageRequest::new(date(), 1, 0).is_ok());
    }

    #[test]
    fn test_next_page_advances_by_limit() {
        let first = PageRequest::new(date(), 100, 0).unwrap();
        let second = first.next().unwrap();
        assert_eq!(second.offset, 100);
        assert_eq!(second.next().unwrap().offset, 200);
        assert_eq!(second.limit, 100);
        assert_eq!(second.date, first.date);

        let last = PageRequest::new(date(), 10, usize::MAX - 5).unwrap();
        assert!(last.next().is_err());
    }

    #[test]
    fn test_page_url() {
        let source = HttpFeedSource::new("https://news.example.com/sql_to_json.php").unwrap();
        let request = PageRequest::new(date(), 100, 200).unwrap();
        assert_eq!(
            source.page_url(&request).as_str(),
            "https://news.example.com/sql_to_json.php?date=2024-09-09&limit=100&offset=200"
        );
    }

    #[test]
    fn test_page_url_keeps_existing_query() {
        let source = HttpFeedSource::new("http://localhost:8080/feed?lang=en").unwrap();
        let request = PageRequest::new(date(), 5, 0).unwrap();
        assert_eq!(
            source.page_url(&request).as_str(),
            "http://localhost:8080/feed?lang=en&date=2024-09-09&limit=5&offset=0"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            HttpFeedSource::new("sql_to_json.php"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        // Port 9 (discard) on localhost is not expected to speak HTTP.
        let source = HttpFeedSource::new("http://127.0.0.1:9/feed").unwrap();
        let request = PageRequest::new(date(), 10, 0).unwrap();
        let err = source.fetch_page(&request).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
