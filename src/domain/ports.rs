use crate::domain::model::UserRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Local file access: import reads through this, download writes through it.
pub trait FileStore: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn download_dir(&self) -> &str;
    fn page_size(&self) -> usize;
}

/// Upstream source of the record list. One attempt per call, no retry.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>>;
}
