pub mod fetcher;
pub mod logging;
pub mod source;

pub use fetcher::{FeedFetcher, PaginationReport, DEFAULT_PAGE_LIMIT};
pub use logging::{init_logging, Logger};
pub use source::{FeedSource, HttpFeedSource, PageRequest};

pub mod prelude {
    pub use super::source::{FeedSource, PageRequest};
    pub use nt_core::{Article, Envelope, Error, Result};
}
