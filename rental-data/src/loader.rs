//! CSV import of apartments.
//!
//! ## CSV Format
//!
//! Columns are matched by header name; order does not matter and whitespace
//! around headers and values is trimmed. Header names are case-sensitive.
//!
//! | Column               | Required | Default when column absent |
//! |----------------------|----------|----------------------------|
//! | `name`               | yes      | none                       |
//! | `monthly_rate`       | no       | `0`                        |
//! | `occupancy`          | no       | `100`                      |
//! | `operating_expenses` | no       | `15`                       |
//! | `property_tax`       | no       | `5`                        |
//! | `income_tax`         | no       | `10`                       |
//! | `loan_monthly`       | no       | `0`                        |
//!
//! Percentages are whole numbers (`15` means 15%). A numeric cell that is
//! present but empty or not a number is read as `0`, the same way a blank
//! form field would be.
//!
//! ### Example
//!
//! ```csv
//! name,monthly_rate,occupancy,loan_monthly
//! Appartement RDC,850,100,650
//! Studio,450,90,
//! ```

use std::path::Path;

use rental_core::NewApartment;
use thiserror::Error;
use tracing::debug;

use crate::input::parse_amount_or;

/// Errors that can occur while loading apartments from CSV.
#[derive(Debug, Error)]
pub enum ApartmentLoadError {
    /// The CSV itself is malformed (ragged rows, bad encoding, ...).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read apartments file: {0}")]
    Io(#[from] std::io::Error),

    /// The `name` column is absent, or blank on the given 1-based data row.
    #[error("missing apartment name on row {row}")]
    MissingName { row: usize },
}

/// Header positions of the known columns.
#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    monthly_rate: Option<usize>,
    occupancy: Option<usize>,
    operating_expenses: Option<usize>,
    property_tax: Option<usize>,
    income_tax: Option<usize>,
    loan_monthly: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = Self::default();
        for (idx, header) in headers.iter().enumerate() {
            let slot = match header {
                "name" => &mut columns.name,
                "monthly_rate" => &mut columns.monthly_rate,
                "occupancy" => &mut columns.occupancy,
                "operating_expenses" => &mut columns.operating_expenses,
                "property_tax" => &mut columns.property_tax,
                "income_tax" => &mut columns.income_tax,
                "loan_monthly" => &mut columns.loan_monthly,
                other => {
                    debug!(column = other, "ignoring unknown column");
                    continue;
                }
            };
            slot.get_or_insert(idx);
        }
        columns
    }
}

/// Convert a single CSV record into a NewApartment.
///
/// row_number is 1-based (for error messages).
fn convert_record(
    columns: &Columns,
    record: &csv::StringRecord,
    row_number: usize,
) -> Result<NewApartment, ApartmentLoadError> {
    let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i));

    let name = cell(columns.name)
        .filter(|n| !n.is_empty())
        .ok_or(ApartmentLoadError::MissingName { row: row_number })?;

    let defaults = NewApartment::named(name);
    Ok(NewApartment {
        monthly_rate: parse_amount_or(cell(columns.monthly_rate), defaults.monthly_rate),
        occupancy: parse_amount_or(cell(columns.occupancy), defaults.occupancy),
        operating_expenses: parse_amount_or(
            cell(columns.operating_expenses),
            defaults.operating_expenses,
        ),
        property_tax: parse_amount_or(cell(columns.property_tax), defaults.property_tax),
        income_tax: parse_amount_or(cell(columns.income_tax), defaults.income_tax),
        loan_monthly: parse_amount_or(cell(columns.loan_monthly), defaults.loan_monthly),
        ..defaults
    })
}

/// Parse CSV text and return the apartments in file order.
///
/// # Errors
///
/// * [ApartmentLoadError::Parse] – if the CSV is structurally invalid.
/// * [ApartmentLoadError::MissingName] – if a row has no name.
pub fn load_from_str(input: &str) -> Result<Vec<NewApartment>, ApartmentLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let columns = Columns::from_headers(reader.headers()?);

    let apartments = reader
        .records()
        .enumerate()
        .map(|(idx, result)| {
            let record = result?;
            convert_record(&columns, &record, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = apartments.len(), "parsed apartments from CSV");
    Ok(apartments)
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<NewApartment>, ApartmentLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
