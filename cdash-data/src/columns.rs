//! Static table column configuration.
//!
//! The column list is embedded from `fixtures/columns.csv` at compile time
//! and loaded into the store exactly once at startup.
//!
//! # CSV Format
//!
//! Has headers: `key,header,size`. `key` is a [`RecordField`] accessor key;
//! `size` is the preferred width in pixels and may be left empty.
//!
//! ```text
//! key,header,size
//! companyName,Company Name,150
//! loanAmount,Loan Amount,
//! ```

use crate::error::ColumnConfigError;
use crate::record::RecordField;

/// Embedded column configuration for the company table.
pub static COLUMNS_CSV: &str = include_str!("../../fixtures/columns.csv");

/// Maps a record field to a header and a preferred render width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: RecordField,
    pub header: String,
    /// Preferred width in pixels; `None` uses the table default.
    pub size: Option<u32>,
}

impl ColumnDescriptor {
    pub fn new(key: RecordField, header: impl Into<String>, size: Option<u32>) -> Self {
        Self {
            key,
            header: header.into(),
            size,
        }
    }

    pub fn width_or(&self, default_width: u32) -> u32 {
        self.size.unwrap_or(default_width)
    }
}

/// Parse column descriptors from CSV.
pub fn load_column_config(csv_data: &str) -> Result<Vec<ColumnDescriptor>, ColumnConfigError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut columns = Vec::new();
    for result in rdr.records() {
        let r = result?;
        let key = r.get(0).unwrap_or("").trim();
        let header = r.get(1).unwrap_or("").trim();
        let size = r.get(2).unwrap_or("").trim();

        let field: RecordField = key
            .parse()
            .map_err(ColumnConfigError::UnknownField)?;
        let size = if size.is_empty() {
            None
        } else {
            match size.parse::<u32>() {
                Ok(px) if px > 0 => Some(px),
                _ => {
                    return Err(ColumnConfigError::InvalidSize {
                        key: key.to_string(),
                        size: size.to_string(),
                    })
                }
            }
        };

        columns.push(ColumnDescriptor::new(field, header, size));
    }
    log::info!("[CDash] columns: Loaded {} column descriptors", columns.len());
    Ok(columns)
}

/// The embedded company table columns.
pub fn default_columns() -> Result<Vec<ColumnDescriptor>, ColumnConfigError> {
    load_column_config(COLUMNS_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_has_every_field_in_order() {
        let columns = default_columns().unwrap();
        assert_eq!(columns.len(), 13);
        let keys: Vec<RecordField> = columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, RecordField::ALL.to_vec());
        assert_eq!(columns[0].header, "Company Name");
        assert_eq!(columns[0].size, Some(150));
        assert_eq!(columns[9].size, Some(350));
    }

    #[test]
    fn empty_size_falls_back_to_default_width() {
        let columns = default_columns().unwrap();
        let loan = columns
            .iter()
            .find(|c| c.key == RecordField::LoanAmount)
            .unwrap();
        assert_eq!(loan.size, None);
        assert_eq!(loan.width_or(180), 180);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = load_column_config("key,header,size\nshoeSize,Shoe Size,40\n").unwrap_err();
        assert!(matches!(err, ColumnConfigError::UnknownField(k) if k == "shoeSize"));
    }

    #[test]
    fn bad_size_is_rejected() {
        let err = load_column_config("key,header,size\naddress,Address,wide\n").unwrap_err();
        assert!(matches!(err, ColumnConfigError::InvalidSize { .. }));
        let err = load_column_config("key,header,size\naddress,Address,0\n").unwrap_err();
        assert!(matches!(err, ColumnConfigError::InvalidSize { .. }));
    }

    #[test]
    fn header_only_csv_is_empty() {
        assert!(load_column_config("key,header,size\n").unwrap().is_empty());
    }
}
