//! Persisted quotation row.
use std::fmt;

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A quotation as stored in the `quotations` table.
///
/// Carries the eleven API fields plus the row id and the insertion time the
/// database assigned.
#[derive(Debug, Clone, FromRow)]
pub struct QuotationRecord {
    pub id: i64,
    pub code: String,
    pub code_in: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
    pub persist_date: NaiveDateTime,
}

impl fmt::Display for QuotationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}/{} ({}) bid={} ask={} high={} low={} var={} ({}%) quoted={} [{}] persisted={}",
            self.id,
            self.code,
            self.code_in,
            self.name,
            self.bid,
            self.ask,
            self.high,
            self.low,
            self.var_bid,
            self.pct_change,
            self.create_date,
            self.timestamp,
            self.persist_date
        )
    }
}
