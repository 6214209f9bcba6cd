#![crate_name = "relmap"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # relmap
//!
//! Runtime table/column/relation mapping with typed repositories over a
//! pluggable SQL driver.
//!
//! The crate is split along three seams:
//!
//! - [`schema`] and [`map`] hold the metadata model: static column and
//!   relation descriptors supplied by generated code, indexed at startup
//!   into a [`map::DatabaseMap`] and never mutated afterwards.
//! - [`driver`] is the database client seam: [`driver::Connection`] and
//!   [`driver::Statement`] wrap whatever client actually talks to the
//!   database. A reference in-memory driver is provided in
//!   [`driver::memory`].
//! - [`repo`] is the repository machinery generated code builds on:
//!   read/write source routing and per-query-shape prepared statement
//!   memoization.

use thiserror::Error;

pub mod config;
pub mod driver;
pub mod map;
pub mod prelude;
pub mod repo;
pub mod schema;
pub mod types;
pub mod value;

/// Relmap error type.
#[derive(Debug, Error)]
pub enum RelmapError {
    #[error("Map error: {0}")]
    Map(#[from] self::map::MapError),
    #[error("Driver error: {0}")]
    Driver(#[from] self::driver::DriverError),
}

/// Relmap result type.
pub type RelmapResult<T> = Result<T, RelmapError>;
