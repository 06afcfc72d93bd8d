//! sqlzone infrastructure layer: the SQLite zone repository and the
//! hickory-server serving boundary.

pub mod database;
pub mod dns;
pub mod repositories;
