use crate::entities::payments::Payment as PaymentEntity;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Payment {
    pub payment_id: i64,
    pub lease_id: i64,
    pub reference: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    /// Punctual means settled no later than the day it was due.
    pub fn is_on_time(&self) -> bool {
        self.paid_at.date_naive() <= self.due_date
    }
}

impl From<PaymentEntity> for Payment {
    fn from(value: PaymentEntity) -> Self {
        Self {
            payment_id: value.id,
            lease_id: value.lease_id,
            reference: value.reference,
            amount: value.amount,
            due_date: value.due_date,
            paid_at: value.paid_at,
        }
    }
}

#[derive(Deserialize)]
pub struct RecordPaymentRequest {
    pub lease_id: i64,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    /// Defaults to the time of recording.
    pub paid_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn payment(paid_at: DateTime<Utc>) -> Payment {
        Payment {
            payment_id: 1,
            lease_id: 3,
            reference: "PAY-7F3K2Q9M".to_string(),
            amount: Decimal::new(97050, 2),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            paid_at,
        }
    }

    #[test]
    fn paid_on_due_date_is_on_time() {
        let paid = Utc.with_ymd_and_hms(2024, 3, 5, 23, 0, 0).unwrap();
        assert!(payment(paid).is_on_time());
    }

    #[test]
    fn paid_after_due_date_is_late() {
        let paid = Utc.with_ymd_and_hms(2024, 3, 6, 0, 30, 0).unwrap();
        assert!(!payment(paid).is_on_time());
    }
}
