pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{api::HttpRecordSource, storage::LocalStorage};
pub use config::CliConfig;
pub use core::{PageView, Pager, TableSession, TableState};
pub use domain::model::{ExportArtifact, ExportFormat, UserRecord, WriteOp};
pub use utils::error::{Result, RosterError};
