use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One completed conversion as stored. Never updated or deleted.
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    pub id: i32,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Decimal,
    pub converted_amount: Decimal,
    pub rate: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; id and created_at are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewConversion {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Decimal,
    pub converted_amount: Decimal,
    pub rate: Decimal,
}
