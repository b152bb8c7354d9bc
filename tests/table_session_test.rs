use async_trait::async_trait;
use roster::domain::ports::{ConfigProvider, FileStore, RecordSource};
use roster::utils::error::{Result, RosterError};
use roster::{TableSession, UserRecord};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio_test::{assert_err, assert_ok};

struct StubSource {
    records: Vec<UserRecord>,
}

#[async_trait]
impl RecordSource for StubSource {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.clone())
    }
}

#[derive(Clone, Default)]
struct MemoryStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    fn put(&self, path: &str, data: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
    }

    fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty()
    }
}

impl FileStore for MemoryStore {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.get(path).ok_or_else(|| RosterError::ProcessingError {
            message: format!("no such file: {}", path),
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.put(path, data);
        Ok(())
    }
}

struct MockConfig {
    download_dir: String,
    page_size: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            download_dir: "downloads".to_string(),
            page_size: 10,
        }
    }
}

impl ConfigProvider for MockConfig {
    fn api_endpoint(&self) -> &str {
        "http://unused.invalid"
    }

    fn download_dir(&self) -> &str {
        &self.download_dir
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

fn record(name: &str, mobile: &str, dob: &str) -> UserRecord {
    UserRecord {
        name: name.to_string(),
        mobile_number: mobile.to_string(),
        dob: dob.to_string(),
    }
}

fn numbered_records(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| record(&format!("User {}", i), &format!("555-{:04}", i), "1990-01-01"))
        .collect()
}

fn session(
    records: Vec<UserRecord>,
) -> (TableSession<StubSource, MemoryStore, MockConfig>, MemoryStore) {
    let store = MemoryStore::default();
    let session = TableSession::new(
        StubSource { records },
        store.clone(),
        MockConfig::default(),
    );
    (session, store)
}

#[tokio::test]
async fn test_import_replaces_list_and_resets_to_page_one() {
    let (mut session, store) = session(numbered_records(25));
    session.refresh().await.unwrap();
    session.next_page();
    session.next_page();
    assert_eq!(session.page_view().current_page, 3);

    store.put("users.csv", b"name,mobileNumber,dob\nAlice,555-1234,1990-01-01\n");
    let count = session.import_csv("users.csv").await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        session.state().records(),
        &[record("Alice", "555-1234", "1990-01-01")]
    );
    let view = session.page_view();
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 1);
}

#[tokio::test]
async fn test_import_rejects_non_csv_extension() {
    let (mut session, store) = session(numbered_records(3));
    session.refresh().await.unwrap();
    store.put("users.xlsx", b"not relevant");

    tokio_test::assert_err!(session.import_csv("users.xlsx").await);
    assert_eq!(session.state().records().len(), 3);
}

#[tokio::test]
async fn test_failed_import_leaves_list_and_page_unchanged() {
    let (mut session, store) = session(numbered_records(25));
    session.refresh().await.unwrap();
    session.next_page();

    store.put("bad.csv", b"name,mobileNumber,dob\nAl\xFF\xFEice,1,2\n");
    tokio_test::assert_err!(session.import_csv("bad.csv").await);

    assert_eq!(session.state().records().len(), 25);
    assert_eq!(session.page_view().current_page, 2);
    assert!(session.state().pending_write().is_none());
}

#[tokio::test]
async fn test_import_of_missing_file_fails_cleanly() {
    let (mut session, _store) = session(numbered_records(2));
    session.refresh().await.unwrap();

    tokio_test::assert_err!(session.import_csv("nowhere.csv").await);
    assert_eq!(session.state().records().len(), 2);
    // The write slot must be free again after the failure.
    tokio_test::assert_ok!(session.refresh().await);
}

#[tokio::test]
async fn test_csv_round_trip_preserves_all_fields() {
    let records = vec![
        record("Graham, \"Leanne\"", "1-770-736-8031 x56442", "2026-08-31"),
        record("Bob", "555-5678", "1985-06-15"),
        record("", "", ""),
    ];
    let (mut session, store) = session(records.clone());
    session.refresh().await.unwrap();

    session.export_csv().unwrap();
    let bytes = session.state().artifact().unwrap().bytes.clone();
    store.put("round_trip.csv", &bytes);

    session.import_csv("round_trip.csv").await.unwrap();
    assert_eq!(session.state().records(), records.as_slice());
}

#[tokio::test]
async fn test_exporting_empty_list_stages_header_only_csv() {
    let (mut session, _store) = session(Vec::new());
    session.refresh().await.unwrap();

    session.export_csv().unwrap();
    let artifact = session.state().artifact().unwrap();

    assert_eq!(artifact.bytes, b"name,mobileNumber,dob\n");
}

#[tokio::test]
async fn test_download_without_staged_artifact_is_a_noop() {
    let (session, store) = session(Vec::new());

    let saved = session.download().await.unwrap();

    assert_eq!(saved, None);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_download_writes_artifact_under_download_dir() {
    let (mut session, store) = session(numbered_records(2));
    session.refresh().await.unwrap();
    session.export_xlsx().unwrap();

    let saved = session.download().await.unwrap();

    assert_eq!(saved.as_deref(), Some("downloads/data_export.xlsx"));
    let bytes = store.get("downloads/data_export.xlsx").unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_new_export_replaces_staged_artifact() {
    let (mut session, store) = session(numbered_records(2));
    session.refresh().await.unwrap();

    session.export_csv().unwrap();
    session.export_xlsx().unwrap();
    let saved = session.download().await.unwrap();

    assert_eq!(saved.as_deref(), Some("downloads/data_export.xlsx"));
    assert!(store.get("downloads/data_export.csv").is_none());
}

#[tokio::test]
async fn test_pagination_over_twenty_five_records() {
    let (mut session, _store) = session(numbered_records(25));
    session.refresh().await.unwrap();

    assert!(session.next_page());
    assert!(session.next_page());
    let view = session.page_view();
    assert_eq!(view.current_page, 3);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.rows[0].name, "User 20");
    assert_eq!(view.rows[4].name, "User 24");
    assert!(!view.has_next);

    // Next on the last page is a no-op.
    assert!(!session.next_page());
    assert_eq!(session.page_view().current_page, 3);
}
