//! Prelude exposes all the commonly used types of the `relmap` crate.

pub use crate::config::DataSourceConfig;
pub use crate::driver::{Connection, DriverError, DriverResult, Row, Statement};
pub use crate::map::{DatabaseMap, MapError, MapResult, TableMap};
pub use crate::repo::{DataSource, StatementCache, fetch_one};
pub use crate::schema::{
    ColumnDef, DeleteRule, ForeignKeyDef, RelationDef, RelationKind, TableRecord, TableSchema,
};
pub use crate::types::ColumnType;
pub use crate::value::Value;
pub use crate::{RelmapError, RelmapResult};
