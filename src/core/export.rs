use crate::domain::model::{ExportArtifact, ExportFormat, UserRecord};
use crate::utils::error::{Result, RosterError};
use rust_xlsxwriter::Workbook;

/// Serializes the full record list to CSV text: header row then one row per
/// record, standard quoting for embedded commas and quotes. Zero records
/// produce a header-only artifact.
pub fn to_csv(records: &[UserRecord]) -> Result<ExportArtifact> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(UserRecord::CSV_HEADER)?;
    for record in records {
        writer.write_record([&record.name, &record.mobile_number, &record.dob])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RosterError::ProcessingError {
            message: format!("Failed to flush CSV buffer: {}", e),
        })?;

    Ok(ExportArtifact {
        format: ExportFormat::Csv,
        bytes,
    })
}

/// Encodes the full record list as a single-sheet xlsx workbook: one header
/// row plus one row per record, default cell formatting.
pub fn to_xlsx(records: &[UserRecord]) -> Result<ExportArtifact> {
    let mut workbook = Workbook::new();
    // add_worksheet names the sheet "Sheet1".
    let worksheet = workbook.add_worksheet();

    for (col, header) in UserRecord::CSV_HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, record) in records.iter().enumerate() {
        let row = (row + 1) as u32;
        worksheet.write_string(row, 0, record.name.as_str())?;
        worksheet.write_string(row, 1, record.mobile_number.as_str())?;
        worksheet.write_string(row, 2, record.dob.as_str())?;
    }

    let bytes = workbook.save_to_buffer()?;

    Ok(ExportArtifact {
        format: ExportFormat::Xlsx,
        bytes,
    })
}
