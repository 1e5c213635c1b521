/// Season segment in scoreboard URLs (`/seasontype/<n>`).
#[derive(Debug, Clone, Copy, strum_macros::Display)]
pub enum SeasonType {
    #[strum(serialize = "2")]
    RegularSeason,
    #[strum(serialize = "3")]
    Postseason,
}

/// Competition group in scoreboard URLs (`/group/<n>`).
#[derive(Debug, Clone, Copy, strum_macros::Display)]
pub enum Group {
    #[strum(serialize = "50")]
    DivisionI,
}
