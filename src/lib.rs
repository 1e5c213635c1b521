pub use client::EspnClient;
pub use dates::DateRange;
pub use error::{EspnError, Result};
pub use fetch::{HttpFetcher, PageFetcher};
pub use table::GameStatsTable;

mod client;
mod dates;
mod error;
mod fetch;
pub mod model;
pub(crate) mod scraper;
mod table;
