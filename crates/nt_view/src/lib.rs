pub mod filter;
pub mod terminal;
pub mod viewer;
pub mod visibility;

pub use filter::{FilterController, SentimentFilter};
pub use terminal::{format_issue_date, TerminalRenderer};
pub use viewer::Viewer;
pub use visibility::{CardRect, Viewport};

pub mod prelude {
    pub use crate::{FilterController, SentimentFilter, TerminalRenderer, Viewer};
    pub use nt_core::{Article, ArticleStore, ArticleSurface, Error, Result};
}
