use tabled::{Table, Tabled};

use crate::cli::shared::{format_amount, format_rate};
use crate::database::models::conversion::ConversionRecord;
use crate::database::HistoryStore;

#[derive(Debug, Tabled)]
struct StringifiedConversion {
    date: String,
    from: String,
    to: String,
    amount: String,
    converted: String,
    rate: String,
}

fn stringify(record: &ConversionRecord) -> StringifiedConversion {
    StringifiedConversion {
        date: record.created_at.format("%Y/%m/%d %H:%M").to_string(),
        from: record.from_currency.clone(),
        to: record.to_currency.clone(),
        amount: format_amount(record.amount),
        converted: format_amount(record.converted_amount),
        rate: format_rate(record.rate),
    }
}

pub async fn show_history(store: &HistoryStore, limit: i64) -> anyhow::Result<()> {
    let records = match store.recent(limit).await {
        Ok(records) => records,
        Err(err) => {
            println!("Error: could not read the conversion history: {}", err);
            return Ok(());
        }
    };

    if records.is_empty() {
        println!("No conversions recorded yet.");
        return Ok(());
    }

    let rows: Vec<StringifiedConversion> = records.iter().map(stringify).collect();
    let table = Table::new(&rows).to_string();
    println!("\n{}", table);
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rows_carry_fixed_precision_and_a_readable_date() {
        let record = ConversionRecord {
            id: 1,
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            amount: dec!(10),
            converted_amount: dec!(9.0),
            rate: dec!(0.9),
            created_at: Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 0).unwrap(),
        };

        let row = stringify(&record);
        assert_eq!(row.date, "2026/08/07 14:30");
        assert_eq!(row.from, "USD");
        assert_eq!(row.to, "EUR");
        assert_eq!(row.amount, "10.00");
        assert_eq!(row.converted, "9.00");
        assert_eq!(row.rate, "0.9000");
    }
}
