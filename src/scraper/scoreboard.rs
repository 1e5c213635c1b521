use ::scraper::{Html, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::scraper::{absolute_game_url, element_text};

/// Anchor label marking a finished game with a published box score.
const BOX_SCORE_LABEL: &str = "Box Score";

/// Extract the detail-page URL of every game on a scoreboard page that
/// links a box score, in document order.
///
/// A day with zero qualifying anchors yields an empty list; that is a valid
/// outcome (no games scheduled, or none finished yet), not an error.
pub(crate) fn game_links(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_selector = Selector::parse("a")?;
    let links = document
        .select(&anchor_selector)
        .filter(|a| element_text(a) == BOX_SCORE_LABEL)
        .filter_map(|a| a.value().attr("href"))
        .map(absolute_game_url)
        .collect_vec();

    debug!(count = links.len(), "extracted game links");
    Ok(links)
}
