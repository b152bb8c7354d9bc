pub mod export;
pub mod import;
pub mod pager;
pub mod table;

pub use crate::domain::model::{ExportArtifact, ExportFormat, UserRecord, WriteOp};
pub use crate::domain::ports::{ConfigProvider, FileStore, RecordSource};
pub use crate::utils::error::Result;
pub use pager::Pager;
pub use table::{PageView, TableSession, TableState};
