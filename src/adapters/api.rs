use crate::domain::model::UserRecord;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

/// One item of the upstream JSON array. Extra fields are ignored; a missing
/// `name` or `phone` makes the whole response undecodable, which counts as a
/// fetch failure.
#[derive(Debug, Deserialize)]
struct ApiUser {
    name: String,
    phone: String,
}

/// `RecordSource` over a remote HTTP endpoint: one GET per call, no retry,
/// no timeout.
pub struct HttpRecordSource {
    endpoint: String,
    client: Client,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let users: Vec<ApiUser> = response.error_for_status()?.json().await?;

        // The upstream shape has no date of birth; the original UI filled it
        // with the current UTC date.
        let dob = Utc::now().format("%Y-%m-%d").to_string();
        Ok(users
            .into_iter()
            .map(|user| UserRecord {
                name: user.name,
                mobile_number: user.phone,
                dob: dob.clone(),
            })
            .collect())
    }
}
