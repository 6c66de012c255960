use std::path::Path;

use anyhow::Context;
use chrono::{Days, NaiveDate};
use nt_core::{Error, Result};
use nt_feed::DEFAULT_PAGE_LIMIT;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/sql_to_json.php";
pub const DEFAULT_DAYS_BACK: u32 = 2;

/// Optional TOML config file. Every key may be omitted.
///
/// ```toml
/// endpoint = "https://news.example.com/sql_to_json.php"
/// limit = 50
/// date = "2024-09-09"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub date: Option<NaiveDate>,
    pub days_back: Option<u32>,
}

impl FileConfig {
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&raw)
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub date: Option<NaiveDate>,
    pub days_back: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub endpoint: String,
    pub limit: usize,
    pub offset: usize,
    pub date: NaiveDate,
}

impl ViewerConfig {
    /// Merges defaults, then the file, then command-line overrides. Without
    /// an explicit date the issue date is `today` minus `days_back`.
    pub fn resolve(file: Option<FileConfig>, cli: Overrides, today: NaiveDate) -> Result<Self> {
        let file = file.unwrap_or_default();

        let endpoint = cli
            .endpoint
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let limit = cli.limit.or(file.limit).unwrap_or(DEFAULT_PAGE_LIMIT);
        if limit == 0 {
            return Err(Error::Config("limit must be greater than zero".to_string()));
        }
        let offset = cli.offset.or(file.offset).unwrap_or(0);

        let date = match cli.date.or(file.date) {
            Some(date) => date,
            None => {
                let days_back = cli.days_back.or(file.days_back).unwrap_or(DEFAULT_DAYS_BACK);
                issue_date(today, days_back)?
            }
        };

        Ok(Self {
            endpoint,
            limit,
            offset,
            date,
        })
    }
}

pub fn issue_date(today: NaiveDate, days_back: u32) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(days_back as u64))
        .ok_or_else(|| Error::Config(format!("cannot go {} days back from {}", days_back, today)))
}
