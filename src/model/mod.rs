mod common;
mod game;

pub use common::*;
pub use game::*;
