//! View records and the surface they are drawn on.
//!
//! Rendering is split in two: [`project`] turns articles into
//! [`ArticleView`]s without touching any display, and an [`ArticleSurface`]
//! draws a full list of views, replacing whatever it showed before.

use crate::sentiment::SentimentLabel;
use crate::types::Article;
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentBadge {
    pub label: SentimentLabel,
    pub text: &'static str,
    pub color: &'static str,
}

impl SentimentBadge {
    pub fn for_compound(compound: f64) -> Self {
        let label = crate::sentiment::classify(compound);
        Self {
            label,
            text: label.text(),
            color: label.color(),
        }
    }
}

/// One article card. Activating the title opens `link` in a new context.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: SentimentBadge,
    /// Presentational marker toggled by scroll position.
    pub in_view: bool,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            link: article.link.clone(),
            summary: article.summary.clone(),
            keywords: article.keywords.clone(),
            sentiment: SentimentBadge::for_compound(article.sentiment.compound),
            in_view: false,
        }
    }
}

/// An entry of the sentiment selector. Exactly one option is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub trait ArticleSurface {
    /// Clears the article container and rebuilds it from `views`, in order.
    fn show_articles(&mut self, views: &[ArticleView]) -> Result<()>;

    /// Replaces the whole article container with a single message.
    fn show_error(&mut self, message: &str) -> Result<()>;

    /// Updates the sentiment selector.
    fn show_filters(&mut self, _options: &[FilterOption]) -> Result<()> {
        Ok(())
    }

    /// Moves the viewport to `row` and recomputes which cards are in view.
    fn scroll_to(&mut self, _row: usize) -> Result<()> {
        Ok(())
    }
}

impl<S: ArticleSurface + ?Sized> ArticleSurface for &mut S {
    fn show_articles(&mut self, views: &[ArticleView]) -> Result<()> {
        (**self).show_articles(views)
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        (**self).show_error(message)
    }

    fn show_filters(&mut self, options: &[FilterOption]) -> Result<()> {
        (**self).show_filters(options)
    }

    fn scroll_to(&mut self, row: usize) -> Result<()> {
        (**self).scroll_to(row)
    }
}

pub fn project(articles: &[Article]) -> Vec<ArticleView> {
    articles.iter().map(ArticleView::from).collect()
}

/// Projects `articles` and hands the full list to `surface`.
pub fn render<S: ArticleSurface + ?Sized>(surface: &mut S, articles: &[Article]) -> Result<()> {
    let views = project(articles);
    tracing::debug!("rendering {} articles", views.len());
    surface.show_articles(&views)
}
