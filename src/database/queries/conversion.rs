use crate::database::models::conversion::{ConversionRecord, NewConversion};
use crate::database::{HistoryStore, StoreError};

impl HistoryStore {
    /// Appends one record and returns the assigned id.
    pub async fn append(&self, conversion: NewConversion) -> Result<i32, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO conversions
                 (from_currency, to_currency, amount, converted_amount, rate)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id",
                &[
                    &conversion.from_currency,
                    &conversion.to_currency,
                    &conversion.amount,
                    &conversion.converted_amount,
                    &conversion.rate,
                ],
            )
            .await?;
        Ok(row.get(0))
    }

    /// Newest first; the id tie-break keeps insert order within one
    /// timestamp granule.
    pub async fn recent(&self, limit: i64) -> Result<Vec<ConversionRecord>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, from_currency, to_currency, amount, converted_amount, rate, created_at
                 FROM conversions
                 ORDER BY created_at DESC, id DESC
                 LIMIT $1",
                &[&limit],
            )
            .await?;

        Ok(rows
            .iter()
            .map(|row| ConversionRecord {
                id: row.get(0),
                from_currency: row.get(1),
                to_currency: row.get(2),
                amount: row.get(3),
                converted_amount: row.get(4),
                rate: row.get(5),
                created_at: row.get(6),
            })
            .collect())
    }
}

// Run against a scratch database with: cargo test -- --ignored
#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::database::models::conversion::NewConversion;
    use crate::database::HistoryStore;
    use crate::services::shared::env::get_env_variable;

    async fn scratch_store() -> HistoryStore {
        let url = get_env_variable("POSTGRES_URL")
            .expect("POSTGRES_URL must point at a scratch database");
        let mut store = HistoryStore::connect(&url).await.expect("connect");
        store.run_migrations().await.expect("run_migrations");
        store
    }

    fn conversion(from: &str, to: &str, amount: Decimal, rate: Decimal) -> NewConversion {
        NewConversion {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            amount,
            converted_amount: amount * rate,
            rate,
        }
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres (POSTGRES_URL)"]
    async fn append_then_recent_returns_the_stored_values() {
        let store = scratch_store().await;

        let id = store
            .append(conversion("USD", "EUR", dec!(10), dec!(0.90)))
            .await
            .expect("append");

        let recent = store.recent(1).await.expect("recent");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, id);
        assert_eq!(recent[0].from_currency, "USD");
        assert_eq!(recent[0].to_currency, "EUR");
        assert_eq!(recent[0].amount, dec!(10));
        assert_eq!(recent[0].converted_amount, dec!(9.00));
        assert_eq!(recent[0].rate, dec!(0.90));
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres (POSTGRES_URL)"]
    async fn recent_is_newest_first_and_clamped_to_limit() {
        let store = scratch_store().await;

        let first = store
            .append(conversion("USD", "EUR", dec!(10), dec!(0.90)))
            .await
            .expect("append");
        let second = store
            .append(conversion("EUR", "JPY", dec!(5), dec!(161.20)))
            .await
            .expect("append");
        assert!(second > first);

        let most_recent = store.recent(1).await.expect("recent");
        assert_eq!(most_recent.len(), 1);
        assert_eq!(most_recent[0].id, second);

        let limited = store.recent(2).await.expect("recent");
        assert!(limited.len() <= 2);
        assert!(limited
            .windows(2)
            .all(|pair| (pair[0].created_at, pair[0].id) >= (pair[1].created_at, pair[1].id)));
    }
}
