//! Terminal surface for article cards.
//!
//! The whole screen is redrawn on every update: header with the issue date
//! and the sentiment selector, then the cards. Card heights feed the
//! visibility computation, so cards overlapping the viewport get a
//! highlighted title.

use std::io::{self, Stdout, Write};

use chrono::NaiveDate;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Stylize},
    terminal::{self, Clear, ClearType},
};
use nt_core::{ArticleSurface, ArticleView, FilterOption, Result};
use unicode_width::UnicodeWidthStr;

use crate::visibility::{stack_layout, update_visibility, Viewport};

const DEFAULT_SIZE: (u16, u16) = (80, 24);
const CARD_GAP: usize = 1;
const MIN_WIDTH: usize = 20;
const HELP_LINE: &str =
    "search <term> | sentiment <all|positive|neutral|negative> | scroll <row> | reload | quit";

/// Long form used in the header, e.g. "Monday, September 9, 2024".
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    height: usize,
    paged: bool,
    issue_date: Option<String>,
    filters: Vec<FilterOption>,
    views: Vec<ArticleView>,
    error: Option<String>,
    scroll: usize,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        let (width, height) = terminal::size().unwrap_or(DEFAULT_SIZE);
        Self::new(io::stdout(), width, height)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            width: (width as usize).max(MIN_WIDTH),
            height: height as usize,
            paged: false,
            issue_date: None,
            filters: Vec::new(),
            views: Vec::new(),
            error: None,
            scroll: 0,
        }
    }

    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(format_issue_date(date));
        self
    }

    /// In paged mode only the rows inside the viewport are drawn and the
    /// command help is shown in the header.
    pub fn paged(mut self, paged: bool) -> Self {
        self.paged = paged;
        self
    }

    /// Cards currently on screen, with their visibility flags.
    pub fn views(&self) -> &[ArticleView] {
        &self.views
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(date) = &self.issue_date {
            lines.push(format!("📰 {}", date.as_str().bold()));
        }
        if !self.filters.is_empty() {
            let selector = self
                .filters
                .iter()
                .map(|option| {
                    let label = format!(" {} ", option.label);
                    if option.active {
                        label.reverse().to_string()
                    } else {
                        label
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(selector);
        }
        if self.paged {
            lines.push(HELP_LINE.dim().to_string());
        }
        lines.push("─".repeat(self.width));
        lines
    }

    fn card_lines(&self, view: &ArticleView) -> Vec<String> {
        let width = self.width;
        let mut lines = Vec::new();

        for line in wrap(&view.title, width) {
            let title = if view.in_view {
                line.bold().underlined().to_string()
            } else {
                line.bold().to_string()
            };
            lines.push(hyperlink(&view.link, &title));
        }
        lines.push(view.link.as_str().dim().to_string());
        lines.extend(wrap(&view.summary, width));

        let tags: Vec<String> = view.keywords.iter().map(|k| format!("#{}", k)).collect();
        for line in wrap_units(&tags, width) {
            lines.push(line.with(Color::Cyan).to_string());
        }

        let (r, g, b) = view.sentiment.label.rgb();
        lines.push(
            format!(" {} ", view.sentiment.text)
                .with(Color::Black)
                .on(Color::Rgb { r, g, b })
                .to_string(),
        );
        lines
    }

    fn redraw(&mut self) -> Result<()> {
        let header = self.header_lines();
        let viewport = Viewport::new(self.scroll, self.height.saturating_sub(header.len()));

        let heights: Vec<usize> = self.views.iter().map(|v| self.card_lines(v).len()).collect();
        let rects = stack_layout(&heights, CARD_GAP);
        let visible = update_visibility(&mut self.views, &rects, viewport);
        tracing::debug!("{} of {} cards in view", visible, self.views.len());

        let mut body = Vec::new();
        match &self.error {
            Some(message) => body.push(message.clone()),
            None => {
                for (i, view) in self.views.iter().enumerate() {
                    if i > 0 {
                        body.extend(std::iter::repeat(String::new()).take(CARD_GAP));
                    }
                    body.extend(self.card_lines(view));
                }
            }
        }

        let body: Vec<String> = if self.paged {
            body.into_iter().skip(self.scroll).take(viewport.height).collect()
        } else {
            body
        };

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in header.iter().chain(body.iter()) {
            write!(self.out, "{}\r\n", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> ArticleSurface for TerminalRenderer<W> {
    fn show_articles(&mut self, views: &[ArticleView]) -> Result<()> {
        self.views = views.to_vec();
        self.error = None;
        self.scroll = 0;
        self.redraw()
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        self.views.clear();
        self.error = Some(message.to_string());
        self.scroll = 0;
        self.redraw()
    }

    fn show_filters(&mut self, options: &[FilterOption]) -> Result<()> {
        self.filters = options.to_vec();
        Ok(())
    }

    fn scroll_to(&mut self, row: usize) -> Result<()> {
        self.scroll = row;
        self.redraw()
    }
}

/// OSC 8 hyperlink; terminals without support show the plain text.
fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let lines = wrap_units(&words, width);
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Greedy line filling; a unit wider than `width` gets a line of its own.
fn wrap_units(units: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for unit in units {
        let unit_width = UnicodeWidthStr::width(unit.as_str());
        if line_width > 0 && line_width + 1 + unit_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(unit);
        line_width += unit_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
