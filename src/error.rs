use ::scraper::error::SelectorErrorKind;
use std::num::ParseIntError;

use chrono::NaiveDate;

/// All errors that can occur while collecting box scores.
#[derive(thiserror::Error, Debug)]
pub enum EspnError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// Page structure deviates from the expected box-score layout.
    #[error("page structure mismatch: {0}")]
    Structure(String),

    /// A team table's header row and totals row disagree in width.
    #[error("column mismatch: header has {header} columns, totals row has {totals}")]
    ColumnMismatch { header: usize, totals: usize },

    /// Failed to parse a score from scraped text.
    #[error("failed to parse score: {0}")]
    ScoreParse(#[from] ParseIntError),

    /// Failed to write the aggregated table as CSV.
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to flush the aggregated table to its destination.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A game failed inside the date loop; carries the date and link it was
    /// discovered under.
    #[error("game {url} on {date} failed: {source}")]
    Game {
        date: NaiveDate,
        url: String,
        source: Box<EspnError>,
    },
}

impl<'a> From<SelectorErrorKind<'a>> for EspnError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        EspnError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EspnError>;
