use chrono::NaiveDate;
use nt_core::{render, ArticleStore, ArticleSurface, Error, Result};

use crate::logging::Logger;
use crate::source::{FeedSource, PageRequest};

pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Summary of a finished pagination session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationReport {
    pub pages: usize,
    pub articles: usize,
    pub last_offset: usize,
}

/// Pulls pages from a [`FeedSource`] one after the other until a short page.
///
/// Every accepted page is appended to the store and the whole store is
/// rendered before the next request goes out. The first failure ends the
/// session: nothing is retried.
pub struct FeedFetcher<S> {
    source: S,
    limit: usize,
    start_offset: usize,
    logger: Logger,
}

impl<S: FeedSource> FeedFetcher<S> {
    pub fn new(source: S, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(Error::InvalidRequest(
                "page limit must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            source,
            limit,
            start_offset: 0,
            logger: Logger::new().with_prefix("📰"),
        })
    }

    pub fn with_start_offset(mut self, offset: usize) -> Self {
        self.start_offset = offset;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs one pagination session for `date`.
    ///
    /// On error the surface is left showing only the error text; articles
    /// already appended stay in `store`.
    pub async fn run<A>(
        &self,
        date: NaiveDate,
        store: &mut ArticleStore,
        surface: &mut A,
    ) -> Result<PaginationReport>
    where
        A: ArticleSurface + ?Sized,
    {
        match self.paginate(date, store, surface).await {
            Ok(report) => {
                self.logger.info(&format!(
                    "✅ Loaded {} articles in {} pages",
                    report.articles, report.pages
                ));
                Ok(report)
            }
            Err(e) => {
                self.logger.error(&format!("Error fetching articles: {}", e));
                if let Err(display_err) = surface.show_error(e.user_message()) {
                    self.logger.warn(&format!("Failed to display error: {}", display_err));
                }
                Err(e)
            }
        }
    }

    async fn paginate<A>(
        &self,
        date: NaiveDate,
        store: &mut ArticleStore,
        surface: &mut A,
    ) -> Result<PaginationReport>
    where
        A: ArticleSurface + ?Sized,
    {
        let mut request = PageRequest::new(date, self.limit, self.start_offset)?;
        let mut report = PaginationReport {
            last_offset: request.offset,
            ..Default::default()
        };

        loop {
            let logger = self.logger.clone().with_prefix(format!("[offset {}]", request.offset));
            logger.debug(&format!("Fetching {} articles for {}", request.limit, request.iso_date()));

            let envelope = self.source.fetch_page(&request).await?;
            report.pages += 1;
            report.last_offset = request.offset;

            if !envelope.success {
                return Err(Error::Feed(envelope.failure_message()));
            }

            let received = envelope.data.len();
            store.extend(envelope.data);
            report.articles += received;
            logger.info(&format!("📥 Received {} articles ({} total)", received, store.len()));

            render(surface, store.articles())?;

            // Only a full page means more data may follow.
            if received != request.limit {
                logger.debug("Short page, stopping");
                break;
            }
            request = request.next()?;
        }

        Ok(report)
    }
}
