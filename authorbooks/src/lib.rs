#![crate_name = "authorbooks"]
#![crate_type = "lib"]

//! # authorbooks
//!
//! Example model layer built on `relmap`: an `author` table with its typed
//! repository, and a `book` table carrying a many-to-one relation to it.
//!
//! Everything in here is what a schema code generator would emit; it is
//! written by hand to keep the example self-contained.

pub mod author;
pub mod book;

use relmap::prelude::DatabaseMap;

use crate::author::AuthorSchema;
use crate::book::BookSchema;

/// Builds the database map of the authorbooks schema.
///
/// Called once at startup; the returned registry is read-only afterwards.
pub fn database_map() -> DatabaseMap {
    let mut map = DatabaseMap::new();
    map.register::<AuthorSchema>();
    map.register::<BookSchema>();
    map
}
