//! Holocron: a JSON API over a Star Wars catalog of planets, people and starships, with
//! per-user favorites and a small admin surface.

pub mod model;
pub mod server;
