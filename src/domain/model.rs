use std::fmt;

/// One table row: the unit of fetch, import, export and display.
///
/// Records are value objects with no identity beyond their list position.
/// Field values are carried as-is; nothing validates the shape of a phone
/// number or date once it is in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub mobile_number: String,
    pub dob: String,
}

impl UserRecord {
    /// Column names of the CSV wire contract, in column order.
    pub const CSV_HEADER: [&'static str; 3] = ["name", "mobileNumber", "dob"];
}

/// Format tag of a staged export artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// MIME type of the encoded blob.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// The most recently generated downloadable blob plus its format tag.
///
/// At most one artifact exists at a time; staging a new one replaces the
/// previous. The bytes are immutable until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Download filename, extension derived from the format tag.
    pub fn filename(&self) -> String {
        format!("data_export.{}", self.format.extension())
    }
}

/// A list-replacing operation. At most one may be in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Fetch,
    Import,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOp::Fetch => write!(f, "fetch"),
            WriteOp::Import => write!(f, "import"),
        }
    }
}
