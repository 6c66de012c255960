pub mod error;
pub mod render;
pub mod sentiment;
pub mod store;
pub mod types;

pub use error::{Error, Result, LOAD_ERROR_MESSAGE};
pub use render::{render, ArticleSurface, ArticleView, FilterOption, SentimentBadge};
pub use sentiment::{classify, SentimentLabel};
pub use store::ArticleStore;
pub use types::{Article, Envelope, SentimentScores};
