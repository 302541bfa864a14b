use crate::account::Account;
use crate::transaction::{TransactionKind, TransactionRecord};
use crate::Result;

use csv::Writer;
use serde::Serialize;

/// One CSV row of an account statement.
#[derive(Serialize, Debug)]
struct StatementRow {
    transaction_id: String,
    timestamp: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: String,
    description: String,
}

impl From<&TransactionRecord> for StatementRow {
    fn from(record: &TransactionRecord) -> Self {
        return Self {
            transaction_id: record.id().to_string(),
            timestamp: record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: record.kind(),
            amount: format!("{:.2}", record.amount()),
            description: record.description().to_string(),
        };
    }
}

/// Renders the account's full transaction history as a CSV statement,
/// oldest entry first.
pub fn render_statement(account: &Account) -> Result<String> {
    let mut writer = build_csv_writer();

    for record in account.transaction_history() {
        writer.serialize(StatementRow::from(&record))?;
    }

    return write_to_string(writer);
}

fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
