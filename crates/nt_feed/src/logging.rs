use std::collections::VecDeque;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Thin wrapper over `tracing` that prepends a chain of prefixes to every
/// message.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push_back(prefix.into());
        self
    }

    fn prefix(&self) -> String {
        self.prefixes.iter().map(|p| format!("{} ", p)).collect::<String>()
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}{}", self.prefix(), message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}{}", self.prefix(), message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}{}", self.prefix(), message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}{}", self.prefix(), message);
    }
}

/// Installs the fmt subscriber once. Logs go to stderr so they never
/// interleave with the article list on stdout.
pub fn init_logging(verbose: bool) -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let level = if verbose { Level::DEBUG } else { Level::INFO };
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        });
    }
    Logger::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_chain() {
        let logger = Logger::new().with_prefix("📰").with_prefix("[offset 100]");
        assert_eq!(logger.prefix(), "📰 [offset 100] ");
        assert_eq!(Logger::new().prefix(), "");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false).info("first");
        init_logging(true).debug("second");
    }
}
