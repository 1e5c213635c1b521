use chrono::NaiveDate;
use serde::Serialize;

/// One team's totals for one game: statistic names paired with values, in
/// the order the source table lists them. Names already carry their
/// "home"/"away" prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStatRow {
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

impl TeamStatRow {
    /// (column, value) pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.columns
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
    }
}

/// The normalized unit of the dataset: one flat row per game.
///
/// Statistic columns are prefixed with "home" or "away", so the two teams'
/// tables can never collide with each other or with the metadata fields.
/// Immutable once built; appended exactly once per game link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    /// 1 if the home team won, 0 otherwise.
    pub result: u8,
    pub home_stats: TeamStatRow,
    pub away_stats: TeamStatRow,
}

impl GameRecord {
    /// Flat (column, value) pairs in export order: metadata first, then the
    /// home-prefixed columns, then the away-prefixed columns.
    pub fn fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("Date".to_string(), self.date.to_string()),
            ("HomeTeam".to_string(), self.home_team.clone()),
            ("AwayTeam".to_string(), self.away_team.clone()),
            ("HomeScore".to_string(), self.home_score.to_string()),
            ("AwayScore".to_string(), self.away_score.to_string()),
            ("Result".to_string(), self.result.to_string()),
        ];
        fields.extend(self.home_stats.pairs());
        fields.extend(self.away_stats.pairs());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_metadata_then_home_then_away_order() {
        let record = GameRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            home_team: "UNC".to_string(),
            away_team: "Duke".to_string(),
            home_score: 68,
            away_score: 72,
            result: 0,
            home_stats: TeamStatRow {
                columns: vec!["homePTS".to_string()],
                values: vec!["28".to_string()],
            },
            away_stats: TeamStatRow {
                columns: vec!["awayPTS".to_string()],
                values: vec!["30".to_string()],
            },
        };

        let columns: Vec<_> = record.fields().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            columns,
            vec![
                "Date",
                "HomeTeam",
                "AwayTeam",
                "HomeScore",
                "AwayScore",
                "Result",
                "homePTS",
                "awayPTS",
            ]
        );
    }
}
