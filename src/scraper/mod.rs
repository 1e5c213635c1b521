pub(crate) mod boxscore;
#[cfg(test)]
pub(crate) mod fixtures;
pub(crate) mod normalize;
pub(crate) mod scoreboard;

use ::scraper::ElementRef;
use chrono::NaiveDate;
use itertools::Itertools;

use crate::model::{Group, SeasonType};

const SCOREBOARD_HOST: &str = "https://www.espn.com";
const GAME_HOST: &str = "http://espn.com";

/// Scoreboard URL for one day: date as 8-digit YYYYMMDD, no separators.
pub(crate) fn scoreboard_url(date: NaiveDate, season_type: SeasonType, group: Group) -> String {
    format!(
        "{SCOREBOARD_HOST}/mens-college-basketball/scoreboard/_/date/{}/seasontype/{season_type}/group/{group}",
        date.format("%Y%m%d"),
    )
}

/// Resolve a box-score link against the detail-page host. Links on the
/// scoreboard are relative; absolute ones pass through untouched.
pub(crate) fn absolute_game_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{GAME_HOST}{href}")
    }
}

/// Concatenated, trimmed text content of one element.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .join(" ")
}
