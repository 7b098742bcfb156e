use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Amount;
use crate::model::{Debt, DebtId, DebtType, PayoffSchedule};

/// Errors that can occur when reading debt rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open debts file: {0}")]
    Open(#[source] csv::Error),

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: {field} is not a finite number")]
    NonFinite { line: usize, field: &'static str },

    #[error("line {line}: {field} is out of range")]
    OutOfRange { line: usize, field: &'static str },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    id: Option<DebtId>,
    name: String,
    #[serde(default)]
    r#type: Option<DebtType>,
    balance: f64,
    interest_rate: f64,
    minimum_payment: f64,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    month: u32,
    debt_id: &'a str,
    debt: &'a str,
    payment: String,
    remaining_balance: String,
    interest: String,
}

/// Read debts from a csv file.
///
/// Rows without an id get `debt-<line>`; rows without a type are `other`.
pub fn read_debts(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Debt, CsvError>>, CsvError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(CsvError::Open)?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| -> Result<Debt, CsvError> {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            Ok(Debt {
                id: row.id.unwrap_or_else(|| format!("debt-{line}")),
                name: row.name,
                kind: row.r#type.unwrap_or_default(),
                balance: amount(line, "balance", row.balance)?,
                interest_rate: finite(line, "interest_rate", row.interest_rate)?,
                minimum_payment: amount(line, "minimum_payment", row.minimum_payment)?,
                created_at: None,
            })
        }))
}

fn finite(line: usize, field: &'static str, value: f64) -> Result<f64, CsvError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CsvError::NonFinite { line, field })
    }
}

fn amount(line: usize, field: &'static str, value: f64) -> Result<Amount, CsvError> {
    let value = finite(line, field, value)?;
    Amount::checked_from_float(value).ok_or(CsvError::OutOfRange { line, field })
}

/// Write the schedule as csv, one row per debt payment.
pub fn write_schedule(schedule: &PayoffSchedule, writer: impl io::Write) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for step in schedule.steps.iter().flatten() {
        writer.serialize(OutputRow {
            month: step.month,
            debt_id: &step.debt_id,
            debt: &step.debt_name,
            payment: step.payment.to_string(),
            remaining_balance: step.remaining_balance.to_string(),
            interest: step.interest_paid.to_string(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
