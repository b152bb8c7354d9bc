use crate::core::{export, import, pager::Pager};
use crate::domain::model::{ExportArtifact, UserRecord, WriteOp};
use crate::domain::ports::{ConfigProvider, FileStore, RecordSource};
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::validate_file_extension;
use std::path::Path;

/// One page of the table, derived from the current list and pager.
#[derive(Debug, PartialEq, Eq)]
pub struct PageView<'a> {
    pub rows: &'a [UserRecord],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// The state container: record list, pagination, staged export artifact and
/// the single pending-write slot.
///
/// The container is the sole owner of the list. Both writers (fetch and
/// import) replace it wholesale through `begin_write`/`commit_records`, so at
/// most one replacement is ever in flight and every replacement resets the
/// pager, keeping `current_page` in range for the new list.
#[derive(Debug)]
pub struct TableState {
    records: Vec<UserRecord>,
    pager: Pager,
    artifact: Option<ExportArtifact>,
    pending: Option<WriteOp>,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            pager: Pager::new(page_size),
            artifact: None,
            pending: None,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn artifact(&self) -> Option<&ExportArtifact> {
        self.artifact.as_ref()
    }

    pub fn pending_write(&self) -> Option<WriteOp> {
        self.pending
    }

    /// Claims the write slot for a list-replacing operation. Rejected while
    /// another operation holds it.
    pub fn begin_write(&mut self, op: WriteOp) -> Result<()> {
        match self.pending {
            Some(pending) => Err(RosterError::WriteInFlightError { pending }),
            None => {
                self.pending = Some(op);
                Ok(())
            }
        }
    }

    /// Replaces the entire list, resets pagination to page 1 and frees the
    /// write slot.
    pub fn commit_records(&mut self, records: Vec<UserRecord>) {
        self.records = records;
        self.pager.reset();
        self.pending = None;
    }

    /// Frees the write slot after a failed operation; list and page are left
    /// untouched.
    pub fn abort_write(&mut self) {
        self.pending = None;
    }

    /// Stages a new export artifact, replacing any previous one.
    pub fn stage_artifact(&mut self, artifact: ExportArtifact) {
        self.artifact = Some(artifact);
    }

    pub fn page_view(&self) -> PageView<'_> {
        let count = self.records.len();
        let total_pages = self.pager.total_pages(count);
        let current_page = self.pager.current_page();

        PageView {
            rows: &self.records[self.pager.window(count)],
            current_page,
            total_pages,
            total_records: count,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next_page(self.records.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous_page()
    }
}

/// Wires the state container to the ports and exposes one method per user
/// operation. All methods leave the state untouched on failure.
pub struct TableSession<R: RecordSource, F: FileStore, C: ConfigProvider> {
    source: R,
    store: F,
    config: C,
    state: TableState,
}

impl<R: RecordSource, F: FileStore, C: ConfigProvider> TableSession<R, F, C> {
    pub fn new(source: R, store: F, config: C) -> Self {
        let state = TableState::new(config.page_size());
        Self {
            source,
            store,
            config,
            state,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn page_view(&self) -> PageView<'_> {
        self.state.page_view()
    }

    pub fn next_page(&mut self) -> bool {
        self.state.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }

    /// Fetches the record list from the remote endpoint, replacing the
    /// current list. One attempt; on failure the list and page are unchanged.
    /// Returns the number of records loaded.
    pub async fn refresh(&mut self) -> Result<usize> {
        self.state.begin_write(WriteOp::Fetch)?;

        match self.source.fetch_records().await {
            Ok(records) => {
                let count = records.len();
                tracing::info!("Fetched {} records from the API", count);
                self.state.commit_records(records);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Fetch failed: {}", e);
                self.state.abort_write();
                Err(e)
            }
        }
    }

    /// Imports a local `.csv` file, replacing the current list and resetting
    /// to page 1. On failure the list and page are unchanged. Returns the
    /// number of records imported.
    pub async fn import_csv(&mut self, path: &str) -> Result<usize> {
        validate_file_extension("import_file", path, &["csv"])?;
        self.state.begin_write(WriteOp::Import)?;

        let outcome = async {
            let bytes = self.store.read_file(path).await?;
            import::parse_records(&bytes)
        }
        .await;

        match outcome {
            Ok(records) => {
                let count = records.len();
                tracing::info!("Imported {} records from {}", count, path);
                self.state.commit_records(records);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Import of {} failed: {}", path, e);
                self.state.abort_write();
                Err(e)
            }
        }
    }

    /// Stages a CSV artifact built from the full current list. Returns the
    /// artifact size in bytes. Does not write anything to disk.
    pub fn export_csv(&mut self) -> Result<usize> {
        let artifact = export::to_csv(self.state.records())?;
        let size = artifact.bytes.len();
        tracing::debug!(
            "Staged {} artifact, {} bytes",
            artifact.format.content_type(),
            size
        );
        self.state.stage_artifact(artifact);
        Ok(size)
    }

    /// Stages an xlsx artifact built from the full current list. Returns the
    /// artifact size in bytes. Does not write anything to disk.
    pub fn export_xlsx(&mut self) -> Result<usize> {
        let artifact = export::to_xlsx(self.state.records())?;
        let size = artifact.bytes.len();
        tracing::debug!(
            "Staged {} artifact, {} bytes",
            artifact.format.content_type(),
            size
        );
        self.state.stage_artifact(artifact);
        Ok(size)
    }

    /// Saves the staged artifact into the download directory, named by its
    /// format tag. With nothing staged this is a no-op returning `Ok(None)`,
    /// not an error.
    pub async fn download(&self) -> Result<Option<String>> {
        let Some(artifact) = self.state.artifact() else {
            tracing::debug!("Download requested with no staged artifact");
            return Ok(None);
        };

        let path = Path::new(self.config.download_dir())
            .join(artifact.filename())
            .to_string_lossy()
            .into_owned();
        self.store.write_file(&path, &artifact.bytes).await?;
        tracing::info!("Saved {} artifact to {}", artifact.format.extension(), path);

        Ok(Some(path))
    }
}
