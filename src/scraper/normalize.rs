use chrono::NaiveDate;
use itertools::Itertools;

use crate::error::{EspnError, Result};
use crate::model::{GameRecord, TeamStatRow};
use crate::scraper::boxscore::{parse_summary, RawTable, RawTableSet};

/// Build the one flat record for a game from its raw tables.
///
/// Pure over its inputs: the same tables and date always yield the same
/// record. The prefixing in [`team_stat_row`] guarantees no statistic
/// column can collide with the other side's columns or with the metadata
/// fields.
pub(crate) fn build_record(tables: &RawTableSet, date: NaiveDate) -> Result<GameRecord> {
    let summary = parse_summary(tables)?;
    let home_stats = team_stat_row(tables.home(), "home")?;
    let away_stats = team_stat_row(tables.away(), "away")?;

    let result = summary.result();
    Ok(GameRecord {
        date,
        home_team: summary.home_team,
        away_team: summary.away_team,
        home_score: summary.home_score,
        away_score: summary.away_score,
        result,
        home_stats,
        away_stats,
    })
}

/// One team's totals keyed by prefixed column names.
///
/// Row 0 is the header. The value source is the totals row: second-to-last
/// when the table carries a trailing footer row (three rows or more), or
/// the last row of a bare header-plus-totals table. Never the header row.
fn team_stat_row(table: &RawTable, prefix: &str) -> Result<TeamStatRow> {
    let header = &table.rows[0];
    let totals_index = if table.rows.len() > 2 {
        table.rows.len() - 2
    } else {
        table.rows.len() - 1
    };
    let totals = &table.rows[totals_index];

    if header.len() != totals.len() {
        return Err(EspnError::ColumnMismatch {
            header: header.len(),
            totals: totals.len(),
        });
    }

    Ok(TeamStatRow {
        columns: header
            .iter()
            .map(|name| format!("{prefix}{name}"))
            .collect_vec(),
        values: totals.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::boxscore::parse_tables;
    use crate::scraper::fixtures::{detail_page, duke_unc_page, table_html};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 3).unwrap()
    }

    #[test]
    fn builds_the_expected_record_for_the_duke_unc_page() {
        let tables = parse_tables(&duke_unc_page()).unwrap();
        let record = build_record(&tables, day()).unwrap();

        assert_eq!(record.away_team, "Duke");
        assert_eq!(record.home_team, "UNC");
        assert_eq!(record.away_score, 72);
        assert_eq!(record.home_score, 68);
        assert_eq!(record.result, 0);
        assert_eq!(record.home_stats.columns, vec!["homePTS", "homeREB"]);
        assert_eq!(record.home_stats.values, vec!["28", "12"]);
        assert_eq!(record.away_stats.columns, vec!["awayPTS", "awayREB"]);
        assert_eq!(record.away_stats.values, vec!["30", "15"]);
    }

    #[test]
    fn totals_come_from_second_to_last_row_when_a_footer_is_present() {
        let page = detail_page(&[
            table_html(&[&["Duke", "36", "36", "72"], &["UNC", "30", "38", "68"]]),
            table_html(&[&["decorative"]]),
            table_html(&[
                &["PTS", "REB"],
                &["12", "4"],
                &["18", "11"],
                &["30", "15"],
                &["63%", "footer"],
            ]),
            table_html(&[&["decorative"]]),
            table_html(&[
                &["PTS", "REB"],
                &["28", "12"],
                &["55%", "footer"],
            ]),
        ]);
        let tables = parse_tables(&page).unwrap();
        let record = build_record(&tables, day()).unwrap();

        assert_eq!(record.away_stats.values, vec!["30", "15"]);
        assert_eq!(record.home_stats.values, vec!["28", "12"]);
    }

    #[test]
    fn is_idempotent_over_identical_inputs() {
        let tables = parse_tables(&duke_unc_page()).unwrap();
        let first = build_record(&tables, day()).unwrap();
        let second = build_record(&tables, day()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn prefixed_columns_never_collide_across_sides_or_metadata() {
        let tables = parse_tables(&duke_unc_page()).unwrap();
        let record = build_record(&tables, day()).unwrap();

        let columns: Vec<_> = record.fields().into_iter().map(|(c, _)| c).collect();
        let mut deduped = columns.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(columns.len(), deduped.len());
    }

    #[test]
    fn header_and_totals_width_mismatch_is_a_column_mismatch_error() {
        let page = detail_page(&[
            table_html(&[&["Duke", "36", "36", "72"], &["UNC", "30", "38", "68"]]),
            table_html(&[&["decorative"]]),
            table_html(&[&["PTS", "REB", "AST"], &["30", "15"]]),
            table_html(&[&["decorative"]]),
            table_html(&[&["PTS", "REB"], &["28", "12"]]),
        ]);
        let tables = parse_tables(&page).unwrap();
        let err = build_record(&tables, day()).unwrap_err();
        assert!(matches!(
            err,
            EspnError::ColumnMismatch {
                header: 3,
                totals: 2
            }
        ));
    }
}
