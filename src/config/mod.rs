use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster")]
#[command(about = "A paginated user-record table with CSV import and CSV/xlsx export")]
pub struct CliConfig {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com/users")]
    pub api_endpoint: String,

    #[arg(long, default_value = "./downloads")]
    pub download_dir: String,

    #[arg(long, default_value = "10")]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn download_dir(&self) -> &str {
        &self.download_dir
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("download_dir", &self.download_dir)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
