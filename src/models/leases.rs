use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::leases::Lease as LeaseEntity;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaseStatus {
    Active,
    Terminated,
}

impl LeaseStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Active => "active",
            LeaseStatus::Terminated => "terminated",
        }
    }

    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw {
            "active" => Ok(LeaseStatus::Active),
            "terminated" => Ok(LeaseStatus::Terminated),
            other => unexpected(anyhow::anyhow!("unknown lease status: {other}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Lease {
    pub lease_id: i64,
    pub apartment_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: Decimal,
    pub charges_amount: Decimal,
    pub deposit_amount: Decimal,
    pub status: LeaseStatus,
    pub created_at: DateTime<Utc>,
}

impl Lease {
    /// Rent plus recoverable charges, what the tenant owes each month.
    pub fn monthly_due(&self) -> Decimal {
        self.rent_amount + self.charges_amount
    }
}

impl TryFrom<LeaseEntity> for Lease {
    type Error = AppError;

    fn try_from(value: LeaseEntity) -> ServiceResult<Self> {
        Ok(Self {
            lease_id: value.id,
            apartment_id: value.apartment_id,
            tenant_id: value.tenant_id,
            start_date: value.start_date,
            end_date: value.end_date,
            rent_amount: value.rent_amount,
            charges_amount: value.charges_amount,
            deposit_amount: value.deposit_amount,
            status: LeaseStatus::parse(&value.status)?,
            created_at: value.created_at,
        })
    }
}

#[derive(Deserialize)]
pub struct CreateLeaseRequest {
    pub apartment_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    /// Defaults to the apartment's listed amounts when omitted.
    pub rent_amount: Option<Decimal>,
    pub charges_amount: Option<Decimal>,
    pub deposit_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn monthly_due_adds_charges_to_rent() {
        let lease = Lease {
            lease_id: 1,
            apartment_id: 4,
            tenant_id: 9,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            rent_amount: Decimal::new(85000, 2),
            charges_amount: Decimal::new(12050, 2),
            deposit_amount: Decimal::new(85000, 2),
            status: LeaseStatus::Active,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        };
        assert_eq!(lease.monthly_due(), Decimal::new(97050, 2));
    }
}
