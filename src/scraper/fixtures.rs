//! Canned pages shared by parser and client tests.

/// A scoreboard page with one "Box Score" anchor per href, plus the
/// surrounding links a real scoreboard carries.
pub(crate) fn scoreboard_page(hrefs: &[&str]) -> String {
    let games = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<section class="Scoreboard">
                    <a href="{href}/gamecast">Gamecast</a>
                    <a href="{href}">Box Score</a>
                    <a href="{href}/recap">Highlights</a>
                </section>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<html><body><div id=\"scoreboard-page\">{games}</div></body></html>")
}

/// One `<table>` from a grid of cell strings.
pub(crate) fn table_html(rows: &[&[&str]]) -> String {
    let body = rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| format!("<td>{cell}</td>"))
                .collect::<String>();
            format!("<tr>{cells}</tr>")
        })
        .collect::<String>();
    format!("<table>{body}</table>")
}

/// A detail page holding the given tables in document order.
pub(crate) fn detail_page(tables: &[String]) -> String {
    format!("<html><body>{}</body></html>", tables.join("\n"))
}

/// The Duke @ UNC fixture: Duke (away) 72, UNC (home) 68; away totals
/// PTS 30 / REB 15, home totals PTS 28 / REB 12. Tables 1 and 3 are the
/// decorative fillers the real layout carries.
pub(crate) fn duke_unc_page() -> String {
    detail_page(&[
        table_html(&[&["Duke", "36", "36", "72"], &["UNC", "30", "38", "68"]]),
        table_html(&[&["decorative"]]),
        table_html(&[&["PTS", "REB"], &["30", "15"]]),
        table_html(&[&["decorative"]]),
        table_html(&[&["PTS", "REB"], &["28", "12"]]),
    ])
}
