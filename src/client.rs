use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::dates::DateRange;
use crate::error::{EspnError, Result};
use crate::fetch::PageFetcher;
use crate::model::{GameRecord, Group, SeasonType};
use crate::scraper::{self, boxscore, normalize, scoreboard};
use crate::table::GameStatsTable;

/// The main entry point for collecting box scores from espn.com.
///
/// `EspnClient` wraps a [`PageFetcher`] and exposes methods to list one
/// day's game links, build one game's record, and run the full date-range
/// collection loop.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> espn_scraper::Result<()> {
/// use chrono::NaiveDate;
/// use espn_scraper::{DateRange, EspnClient, GameStatsTable, HttpFetcher};
///
/// let client = EspnClient::new(HttpFetcher::new());
/// let start = NaiveDate::from_ymd_opt(2023, 11, 6).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 11, 10).unwrap();
///
/// let mut table = GameStatsTable::new();
/// client
///     .collect_range(DateRange::new(start, end), &mut table)
///     .await?;
/// println!("collected {} games", table.len());
/// # Ok(())
/// # }
/// ```
pub struct EspnClient<F> {
    fetcher: F,
    season_type: SeasonType,
    group: Group,
}

impl<F: PageFetcher> EspnClient<F> {
    /// Create a client scoped to the Division I regular season.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            season_type: SeasonType::RegularSeason,
            group: Group::DivisionI,
        }
    }

    /// Override the season segment and competition group used in
    /// scoreboard URLs.
    pub fn with_scope(mut self, season_type: SeasonType, group: Group) -> Self {
        self.season_type = season_type;
        self.group = group;
        self
    }

    /// Fetch one day's scoreboard and list the box-score links on it.
    #[instrument(skip(self))]
    pub async fn scoreboard_links(&self, date: NaiveDate) -> Result<Vec<String>> {
        let url = scraper::scoreboard_url(date, self.season_type, self.group);
        let html = self.fetcher.fetch(&url).await?;
        scoreboard::game_links(&html)
    }

    /// Fetch one game's detail page and normalize it into a record.
    #[instrument(skip(self))]
    pub async fn game_record(&self, date: NaiveDate, url: &str) -> Result<GameRecord> {
        let html = self.fetcher.fetch(url).await?;
        let tables = boxscore::parse_tables(&html)?;
        normalize::build_record(&tables, date)
    }

    /// Collect every game in the date range into `table`.
    ///
    /// Records land in discovery order: date ascending, link order within a
    /// date. The first failing game halts collection with its date and link
    /// attached; rows already appended stay in `table` but are not
    /// persisted anywhere. Callers wanting a skip-and-continue policy
    /// should drive [`Self::scoreboard_links`] and [`Self::game_record`]
    /// directly.
    pub async fn collect_range(&self, range: DateRange, table: &mut GameStatsTable) -> Result<()> {
        self.collect_range_with(range, table, |_, _| Ok(())).await
    }

    /// Like [`Self::collect_range`], but runs `checkpoint` after each
    /// completed date so partial progress can be persisted incrementally
    /// (and collection resumed from the last flushed date after a crash).
    pub async fn collect_range_with(
        &self,
        range: DateRange,
        table: &mut GameStatsTable,
        mut checkpoint: impl FnMut(&GameStatsTable, NaiveDate) -> Result<()>,
    ) -> Result<()> {
        for date in range {
            let links = self.scoreboard_links(date).await?;
            debug!(%date, games = links.len(), "collecting day");

            for url in links {
                let record =
                    self.game_record(date, &url)
                        .await
                        .map_err(|e| EspnError::Game {
                            date,
                            url: url.clone(),
                            source: Box::new(e),
                        })?;
                table.append(&record);
            }

            checkpoint(table, date)?;
        }
        Ok(())
    }
}
