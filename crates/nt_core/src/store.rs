use crate::types::Article;

/// Ordered, append-only collection of the articles received in the current
/// pagination session. Duplicates are kept as delivered.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, page: Vec<Article>) {
        self.articles.extend(page);
    }

    /// Drops everything; used when a new pagination session starts.
    pub fn reset(&mut self) {
        self.articles.clear();
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentScores;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            summary: String::new(),
            link: format!("https://example.com/{}", title),
            keywords: vec![],
            sentiment: SentimentScores::default(),
        }
    }

    #[test]
    fn test_store_appends_in_order_and_keeps_duplicates() {
        let mut store = ArticleStore::new();
        assert!(store.is_empty());

        store.extend(vec![article("a"), article("b")]);
        store.extend(vec![article("b"), article("c")]);

        let titles: Vec<_> = store.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "b", "c"]);
        assert_eq!(store.len(), 4);

        store.reset();
        assert!(store.is_empty());
    }
}
