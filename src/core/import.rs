use crate::domain::model::UserRecord;
use crate::utils::error::Result;

/// Column indices resolved from the header row.
///
/// Columns are matched by the exact contract names `name`, `mobileNumber`
/// and `dob`. Unknown columns are dropped, and a missing column leaves its
/// field empty on every row.
#[derive(Debug, Default)]
struct ColumnMap {
    name: Option<usize>,
    mobile_number: Option<usize>,
    dob: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut map = Self::default();

        for (i, header) in headers.iter().enumerate() {
            match header {
                "name" => map.name = Some(i),
                "mobileNumber" => map.mobile_number = Some(i),
                "dob" => map.dob = Some(i),
                _ => {}
            }
        }

        map
    }
}

/// Parses CSV bytes into records, first row as header.
///
/// Rows may be ragged (`flexible`): a missing cell yields an empty string, as
/// does a column absent from the header. Field values are taken as-is, with
/// no validation of dates or phone numbers. A file the reader cannot decode
/// (e.g. not valid UTF-8) fails the whole parse.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<UserRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let map = ColumnMap::from_headers(&headers);
    tracing::debug!("CSV header resolved to column map: {:?}", map);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| row.get(i)).unwrap_or_default().to_string()
        };

        records.push(UserRecord {
            name: field(map.name),
            mobile_number: field(map.mobile_number),
            dob: field(map.dob),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_columns_by_exact_name() {
        let csv = b"name,mobileNumber,dob\nAlice,555-1234,1990-01-01\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(
            records,
            vec![UserRecord {
                name: "Alice".to_string(),
                mobile_number: "555-1234".to_string(),
                dob: "1990-01-01".to_string(),
            }]
        );
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = b"dob,name,mobileNumber\n1990-01-01,Alice,555-1234\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].mobile_number, "555-1234");
        assert_eq!(records[0].dob, "1990-01-01");
    }

    #[test]
    fn test_unknown_columns_are_dropped() {
        let csv = b"id,name,email,mobileNumber,dob\n7,Bob,bob@example.com,555-0000,1980-05-05\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bob");
        assert_eq!(records[0].mobile_number, "555-0000");
    }

    #[test]
    fn test_missing_column_yields_empty_field() {
        let csv = b"name,mobileNumber\nCarol,555-9999\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records[0].dob, "");
    }

    #[test]
    fn test_header_match_is_case_sensitive() {
        // "mobilenumber" is not the contract name, so the column is dropped.
        let csv = b"name,mobilenumber,dob\nDan,555-1111,1970-01-01\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records[0].mobile_number, "");
        assert_eq!(records[0].name, "Dan");
    }

    #[test]
    fn test_short_rows_fill_missing_cells() {
        let csv = b"name,mobileNumber,dob\nEve\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records[0].name, "Eve");
        assert_eq!(records[0].mobile_number, "");
        assert_eq!(records[0].dob, "");
    }

    #[test]
    fn test_garbage_values_are_accepted_as_is() {
        let csv = b"name,mobileNumber,dob\nFrank,not-a-phone,not-a-date\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records[0].mobile_number, "not-a-phone");
        assert_eq!(records[0].dob, "not-a-date");
    }

    #[test]
    fn test_quoted_fields_with_embedded_commas() {
        let csv = b"name,mobileNumber,dob\n\"Graham, Leanne\",\"555,1234\",1990-01-01\n";
        let records = parse_records(csv).unwrap();

        assert_eq!(records[0].name, "Graham, Leanne");
        assert_eq!(records[0].mobile_number, "555,1234");
    }

    #[test]
    fn test_non_utf8_data_fails_the_parse() {
        let csv = b"name,mobileNumber,dob\nAl\xFF\xFEice,555-1234,1990-01-01\n";
        assert!(parse_records(csv).is_err());
    }

    #[test]
    fn test_header_only_file_yields_empty_list() {
        let records = parse_records(b"name,mobileNumber,dob\n").unwrap();
        assert!(records.is_empty());
    }
}
