use std::fmt;
use std::str::FromStr;

use nt_core::{Article, ArticleStore, Error, FilterOption, Result, SentimentLabel};

/// Selection of the sentiment control. `All` bypasses filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(SentimentLabel),
}

impl SentimentFilter {
    pub const OPTIONS: [SentimentFilter; 4] = [
        SentimentFilter::All,
        SentimentFilter::Only(SentimentLabel::Positive),
        SentimentFilter::Only(SentimentLabel::Neutral),
        SentimentFilter::Only(SentimentLabel::Negative),
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SentimentFilter::All => "all",
            SentimentFilter::Only(label) => label.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => "All",
            SentimentFilter::Only(label) => label.text(),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(label) => article.sentiment_label() == *label,
        }
    }
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SentimentFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SentimentFilter::All);
        }
        s.parse::<SentimentLabel>().map(SentimentFilter::Only)
    }
}

/// Derives filtered views of the store. Every call starts from the full
/// store, and the store itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    active: SentimentFilter,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SentimentFilter {
        self.active
    }

    /// Case-insensitive substring match on title, summary or any keyword.
    /// An empty term matches everything.
    pub fn search(&self, store: &ArticleStore, term: &str) -> Vec<Article> {
        let needle = term.to_lowercase();
        store
            .iter()
            .filter(|article| {
                article.title.to_lowercase().contains(&needle)
                    || article.summary.to_lowercase().contains(&needle)
                    || article
                        .keywords
                        .iter()
                        .any(|keyword| keyword.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Makes `filter` the active option and returns the matching articles.
    pub fn select_sentiment(&mut self, store: &ArticleStore, filter: SentimentFilter) -> Vec<Article> {
        self.active = filter;
        match filter {
            SentimentFilter::All => store.articles().to_vec(),
            _ => store.iter().filter(|a| filter.matches(a)).cloned().collect(),
        }
    }

    /// The selector entries, with only the active one marked.
    pub fn options(&self) -> Vec<FilterOption> {
        SentimentFilter::OPTIONS
            .iter()
            .map(|option| FilterOption {
                id: option.id(),
                label: option.label(),
                active: *option == self.active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nt_core::SentimentScores;

    fn article(title: &str, summary: &str, keywords: &[&str], compound: f64) -> Article {
        Article {
            title: title.to_string(),
            summary: summary.to_string(),
            link: format!("https://example.com/{}", title.replace(' ', "-")),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            sentiment: SentimentScores { compound, ..Default::default() },
        }
    }

    fn store() -> ArticleStore {
        let mut store = ArticleStore::new();
        store.extend(vec![
            article("Climate summit opens", "Leaders gather.", &["politics"], 0.3),
            article("Markets rally", "Stocks up on CLIMATE deal.", &["economy"], 0.05),
            article("Flooding in the north", "Rivers overflow.", &["Climate-Change"], -0.6),
            article("Local team wins", "A late goal.", &["sports"], 0.051),
            article("Tax bill stalls", "Debate continues.", &[], -0.05),
        ]);
        store
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_search_matches_title_summary_or_keyword() {
        let store = store();
        let controller = FilterController::new();

        let hits = controller.search(&store, "climate");
        assert_eq!(
            titles(&hits),
            vec!["Climate summit opens", "Markets rally", "Flooding in the north"]
        );

        let hits = controller.search(&store, "GOAL");
        assert_eq!(titles(&hits), vec!["Local team wins"]);

        assert!(controller.search(&store, "volcano").is_empty());
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let store = store();
        let hits = FilterController::new().search(&store, "");
        assert_eq!(hits, store.articles());
    }

    #[test]
    fn test_search_does_not_narrow_previous_result() {
        let store = store();
        let mut controller = FilterController::new();
        controller.select_sentiment(&store, SentimentFilter::Only(SentimentLabel::Negative));

        // Searches always start from the full store.
        let hits = controller.search(&store, "markets");
        assert_eq!(titles(&hits), vec!["Markets rally"]);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_sentiment_filter() {
        let store = store();
        let mut controller = FilterController::new();

        let all = controller.select_sentiment(&store, SentimentFilter::All);
        assert_eq!(all, store.articles());

        let positive = controller.select_sentiment(&store, "positive".parse().unwrap());
        assert_eq!(titles(&positive), vec!["Climate summit opens", "Local team wins"]);
        assert!(positive.iter().all(|a| a.sentiment.compound > 0.05));

        let neutral = controller.select_sentiment(&store, "neutral".parse().unwrap());
        assert_eq!(titles(&neutral), vec!["Markets rally", "Tax bill stalls"]);

        let negative = controller.select_sentiment(&store, "Negative".parse().unwrap());
        assert_eq!(titles(&negative), vec!["Flooding in the north"]);
    }

    #[test]
    fn test_exactly_one_active_option() {
        let store = store();
        let mut controller = FilterController::new();

        let options = controller.options();
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|o| o.active).count(), 1);
        assert!(options[0].active && options[0].id == "all");

        controller.select_sentiment(&store, SentimentFilter::Only(SentimentLabel::Neutral));
        let active: Vec<_> = controller.options().into_iter().filter(|o| o.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "neutral");
        assert_eq!(active[0].label, "Neutral");
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("ALL".parse::<SentimentFilter>().unwrap(), SentimentFilter::All);
        assert_eq!(
            "negative".parse::<SentimentFilter>().unwrap(),
            SentimentFilter::Only(SentimentLabel::Negative)
        );
        assert!("mixed".parse::<SentimentFilter>().is_err());
        assert_eq!(SentimentFilter::Only(SentimentLabel::Positive).to_string(), "positive");
    }
}
