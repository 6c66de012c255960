use std::str::FromStr;

use nt_core::{Error, Result};
use nt_view::SentimentFilter;

pub const HELP: &str = "\
Commands:
  search <term>         show articles whose title, summary or keywords contain <term>
  sentiment <name>      show all | positive | neutral | negative articles
  scroll <row>          move the viewport to <row>
  reload                fetch the feed again from the first page
  help                  show this help
  quit                  exit";

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Sentiment(SentimentFilter),
    Scroll(usize),
    Reload,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            // A bare "search" clears the search.
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "sentiment" | "filter" => Ok(Command::Sentiment(rest.parse()?)),
            "scroll" => rest
                .parse()
                .map(Command::Scroll)
                .map_err(|_| Error::InvalidRequest(format!("Invalid row: {:?}", rest))),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(Error::InvalidRequest(format!("Unknown command: {}", other))),
        }
    }
}
