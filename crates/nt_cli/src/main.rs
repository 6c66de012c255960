mod commands;
mod config;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use commands::{Command, HELP};
use config::{FileConfig, Overrides, ViewerConfig};
use nt_core::{ArticleSurface, Result};
use nt_feed::{init_logging, FeedFetcher, FeedSource, HttpFeedSource, Logger};
use nt_view::{SentimentFilter, TerminalRenderer, Viewer};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "nt-viewer", author, version, about = "Browse the daily article feed in the terminal", long_about = None)]
pub struct Cli {
    /// Feed endpoint queried with ?date=&limit=&offset=
    #[arg(long)]
    endpoint: Option<String>,
    /// Issue date (YYYY-MM-DD). Defaults to today minus --days-back.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Articles requested per page
    #[arg(long)]
    limit: Option<usize>,
    /// Offset of the first page
    #[arg(long)]
    offset: Option<usize>,
    #[arg(long)]
    days_back: Option<u32>,
    /// TOML file with endpoint, limit, offset, date and days_back
    #[arg(long)]
    config: Option<PathBuf>,
    /// Show only articles matching this term once loaded
    #[arg(long, conflicts_with = "sentiment")]
    search: Option<String>,
    /// Show only articles with this sentiment once loaded (all, positive, neutral, negative)
    #[arg(long)]
    sentiment: Option<SentimentFilter>,
    /// Keep reading commands from stdin after loading
    #[arg(short, long)]
    interactive: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            limit: self.limit,
            offset: self.offset,
            date: self.date,
            days_back: self.days_back,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(cli.verbose);

    let file = cli.config.as_deref().map(FileConfig::load).transpose()?;
    let config = ViewerConfig::resolve(file, cli.overrides(), Local::now().date_naive())?;
    logger.info(&format!(
        "🗞️ Loading articles for {} from {}",
        config.date, config.endpoint
    ));

    let source = HttpFeedSource::new(&config.endpoint)?;
    let fetcher = FeedFetcher::new(source, config.limit)?.with_start_offset(config.offset);
    let surface = TerminalRenderer::stdout()
        .with_issue_date(config.date)
        .paged(cli.interactive);
    let mut viewer = Viewer::new(fetcher, surface);

    let loaded = viewer.load(config.date).await;
    if loaded.is_ok() {
        apply_startup_filter(&mut viewer, &cli)?;
    }

    if cli.interactive {
        run_interactive(&mut viewer, config.date, &logger).await
    } else {
        // The surface already shows any failure; the error still sets the exit code.
        loaded.map(|_| ())
    }
}

fn apply_startup_filter<S, A>(viewer: &mut Viewer<S, A>, cli: &Cli) -> Result<()>
where
    S: FeedSource,
    A: ArticleSurface,
{
    if let Some(filter) = cli.sentiment {
        viewer.select_sentiment(filter)?;
    } else if let Some(term) = &cli.search {
        viewer.search(term)?;
    }
    Ok(())
}

async fn run_interactive<S, A>(viewer: &mut Viewer<S, A>, date: NaiveDate, logger: &Logger) -> Result<()>
where
    S: FeedSource,
    A: ArticleSurface,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                logger.warn(&format!("{} (type `help` for commands)", e));
                continue;
            }
        };

        match command {
            Command::Search(term) => {
                viewer.search(&term)?;
            }
            Command::Sentiment(filter) => {
                viewer.select_sentiment(filter)?;
            }
            Command::Scroll(row) => viewer.scroll_to(row)?,
            Command::Reload => {
                // Failures are already on screen; the prompt stays usable.
                if let Err(e) = viewer.load(date).await {
                    logger.debug(&format!("Reload failed: {}", e));
                }
            }
            Command::Help => eprintln!("{}", HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}
