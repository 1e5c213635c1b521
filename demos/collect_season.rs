use std::time::Duration;

use chrono::NaiveDate;
use tokio::time::sleep;

use espn_scraper::{DateRange, EspnClient, GameStatsTable, HttpFetcher};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let client = EspnClient::new(HttpFetcher::new());

    let start = NaiveDate::from_ymd_opt(2023, 10, 6).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();

    let mut table = GameStatsTable::new();
    for date in DateRange::new(start, end) {
        let links = match client.scoreboard_links(date).await {
            Ok(links) => links,
            Err(e) => {
                eprintln!("{date}: skipping day: {e}");
                continue;
            }
        };
        println!("{date}: {} games", links.len());

        for url in links {
            match client.game_record(date, &url).await {
                Ok(record) => table.append(&record),
                Err(e) => eprintln!("{date}: skipping {url}: {e}"),
            }
            sleep(Duration::from_millis(100)).await;
        }

        // Rewrite the CSV after every day so a crash only loses the
        // current date.
        table
            .write_csv(std::fs::File::create("game_stats.csv").unwrap())
            .unwrap();
    }

    println!("Collected {} games", table.len());
}
