use chrono::NaiveDate;
use nt_core::{render, ArticleStore, ArticleSurface, Result};
use nt_feed::{FeedFetcher, FeedSource, PaginationReport};
use tracing::info;

use crate::filter::{FilterController, SentimentFilter};

/// Owns the session state: the article store, the fetcher that fills it,
/// the filter selection and the surface everything is drawn on.
pub struct Viewer<S, A> {
    fetcher: FeedFetcher<S>,
    store: ArticleStore,
    filters: FilterController,
    surface: A,
}

impl<S: FeedSource, A: ArticleSurface> Viewer<S, A> {
    pub fn new(fetcher: FeedFetcher<S>, surface: A) -> Self {
        Self {
            fetcher,
            store: ArticleStore::new(),
            filters: FilterController::new(),
            surface,
        }
    }

    /// Starts a new pagination session for `date`, discarding what a
    /// previous session loaded.
    pub async fn load(&mut self, date: NaiveDate) -> Result<PaginationReport> {
        self.store.reset();
        self.filters = FilterController::new();
        self.surface.show_filters(&self.filters.options())?;
        self.fetcher.run(date, &mut self.store, &mut self.surface).await
    }

    /// Renders the articles matching `term`; returns how many matched.
    pub fn search(&mut self, term: &str) -> Result<usize> {
        let hits = self.filters.search(&self.store, term);
        info!("🔍 {} of {} articles match {:?}", hits.len(), self.store.len(), term);
        render(&mut self.surface, &hits)?;
        Ok(hits.len())
    }

    /// Activates `filter` and renders the matching articles.
    pub fn select_sentiment(&mut self, filter: SentimentFilter) -> Result<usize> {
        let subset = self.filters.select_sentiment(&self.store, filter);
        info!("🎚️ Sentiment filter {}: {} articles", filter, subset.len());
        self.surface.show_filters(&self.filters.options())?;
        render(&mut self.surface, &subset)?;
        Ok(subset.len())
    }

    pub fn scroll_to(&mut self, row: usize) -> Result<()> {
        self.surface.scroll_to(row)
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub fn active_filter(&self) -> SentimentFilter {
        self.filters.active()
    }

    pub fn surface(&self) -> &A {
        &self.surface
    }

    pub fn into_surface(self) -> A {
        self.surface
    }
}
