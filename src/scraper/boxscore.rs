use ::scraper::{Html, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::{EspnError, Result};
use crate::scraper::element_text;

/// Where each table of interest sits on a box-score page.
///
/// Positions are a contract with the source layout, not discoverable from
/// the markup itself. Validating them in one place keeps the layout
/// assumption behind a single boundary instead of scattering indices
/// through the pipeline.
struct PageLayout {
    min_tables: usize,
    summary: usize,
    away: usize,
    home: usize,
    min_team_rows: usize,
}

/// ESPN box-score pages: [0] linescore summary, [2] away box score,
/// [4] home box score. Tables 1 and 3 are decorative and skipped.
const LAYOUT: PageLayout = PageLayout {
    min_tables: 5,
    summary: 0,
    away: 2,
    home: 4,
    min_team_rows: 2,
};

/// Summary table: row 0 = away team, row 1 = home team;
/// column 0 = team name, column 3 = final score.
const SUMMARY_AWAY_ROW: usize = 0;
const SUMMARY_HOME_ROW: usize = 1;
const SUMMARY_NAME_COL: usize = 0;
const SUMMARY_SCORE_COL: usize = 3;

/// One `<table>` as a grid of trimmed cell strings.
#[derive(Debug, Clone)]
pub(crate) struct RawTable {
    pub rows: Vec<Vec<String>>,
}

/// The tables pulled from one detail page, already validated against
/// [`LAYOUT`]. Transient; lives only while one page is processed.
#[derive(Debug)]
pub(crate) struct RawTableSet {
    tables: Vec<RawTable>,
}

impl RawTableSet {
    pub(crate) fn summary(&self) -> &RawTable {
        &self.tables[LAYOUT.summary]
    }

    pub(crate) fn away(&self) -> &RawTable {
        &self.tables[LAYOUT.away]
    }

    pub(crate) fn home(&self) -> &RawTable {
        &self.tables[LAYOUT.home]
    }
}

/// Teams and final scores read from the linescore summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameSummary {
    pub away_team: String,
    pub home_team: String,
    pub away_score: u32,
    pub home_score: u32,
}

impl GameSummary {
    /// 1 if the home team won, 0 otherwise. The source domain has no tied
    /// games; a tie would land on 0 (counted as an away win).
    pub(crate) fn result(&self) -> u8 {
        u8::from(self.home_score > self.away_score)
    }
}

/// Parse every `<table>` on a detail page and validate the fixed-position
/// layout contract.
pub(crate) fn parse_tables(html: &str) -> Result<RawTableSet> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table")?;
    let row_selector = Selector::parse("tr")?;
    let cell_selector = Selector::parse("th, td")?;

    let tables = document
        .select(&table_selector)
        .map(|table| RawTable {
            rows: table
                .select(&row_selector)
                .map(|row| {
                    row.select(&cell_selector)
                        .map(|cell| element_text(&cell))
                        .collect_vec()
                })
                .collect_vec(),
        })
        .collect_vec();

    validate(tables)
}

fn validate(tables: Vec<RawTable>) -> Result<RawTableSet> {
    if tables.len() < LAYOUT.min_tables {
        return Err(EspnError::Structure(format!(
            "expected at least {} tables, found {}",
            LAYOUT.min_tables,
            tables.len()
        )));
    }

    for (side, index) in [("away", LAYOUT.away), ("home", LAYOUT.home)] {
        let rows = tables[index].rows.len();
        if rows < LAYOUT.min_team_rows {
            return Err(EspnError::Structure(format!(
                "{side} team table has {rows} rows, need at least {} (header + totals)",
                LAYOUT.min_team_rows
            )));
        }
    }

    debug!(tables = tables.len(), "validated box score layout");
    Ok(RawTableSet { tables })
}

/// Read both teams' names and final scores from the summary table.
pub(crate) fn parse_summary(tables: &RawTableSet) -> Result<GameSummary> {
    let summary = tables.summary();
    let (away_team, away_score) = summary_side(summary, SUMMARY_AWAY_ROW, "away")?;
    let (home_team, home_score) = summary_side(summary, SUMMARY_HOME_ROW, "home")?;

    Ok(GameSummary {
        away_team,
        home_team,
        away_score,
        home_score,
    })
}

fn summary_side(summary: &RawTable, row: usize, side: &str) -> Result<(String, u32)> {
    let cells = summary
        .rows
        .get(row)
        .ok_or_else(|| EspnError::Structure(format!("summary table is missing the {side} row")))?;
    let name = cells
        .get(SUMMARY_NAME_COL)
        .cloned()
        .ok_or_else(|| EspnError::Structure(format!("summary {side} row has no team name cell")))?;
    let score = cells.get(SUMMARY_SCORE_COL).ok_or_else(|| {
        EspnError::Structure(format!("summary {side} row has no final score cell"))
    })?;

    Ok((name, score.parse()?))
}
