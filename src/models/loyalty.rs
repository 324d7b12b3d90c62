use crate::entities::loyalty::LoyaltyTotals;
use serde::Serialize;

pub const ON_TIME_POINTS: i32 = 10;
pub const LATE_POINTS: i32 = 2;

const SILVER_THRESHOLD: i64 = 500;
const GOLD_THRESHOLD: i64 = 1500;
const PLATINUM_THRESHOLD: i64 = 3000;

pub const fn payment_points(on_time: bool) -> i32 {
    match on_time {
        true => ON_TIME_POINTS,
        false => LATE_POINTS,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub const fn from_points(points: i64) -> Self {
        if points >= PLATINUM_THRESHOLD {
            LoyaltyTier::Platinum
        } else if points >= GOLD_THRESHOLD {
            LoyaltyTier::Gold
        } else if points >= SILVER_THRESHOLD {
            LoyaltyTier::Silver
        } else {
            LoyaltyTier::Bronze
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoyaltySummary {
    pub tenant_id: i64,
    pub points: i64,
    pub tier: LoyaltyTier,
    pub punctuality: f64,
    pub on_time_count: i64,
    pub total_count: i64,
}

impl From<LoyaltyTotals> for LoyaltySummary {
    fn from(totals: LoyaltyTotals) -> Self {
        let punctuality = match totals.total_count {
            0 => 0.0,
            total => totals.on_time_count as f64 / total as f64,
        };
        Self {
            tenant_id: totals.tenant_id,
            points: totals.points,
            tier: LoyaltyTier::from_points(totals.points),
            punctuality,
            on_time_count: totals.on_time_count,
            total_count: totals.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(LoyaltyTier::from_points(0), LoyaltyTier::Bronze);
        assert_eq!(LoyaltyTier::from_points(499), LoyaltyTier::Bronze);
        assert_eq!(LoyaltyTier::from_points(500), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_points(1499), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_points(1500), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_points(2999), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_points(3000), LoyaltyTier::Platinum);
    }

    #[test]
    fn empty_ledger_scores_zero_punctuality() {
        let summary = LoyaltySummary::from(LoyaltyTotals {
            tenant_id: 5,
            points: 0,
            on_time_count: 0,
            total_count: 0,
        });
        assert_eq!(summary.punctuality, 0.0);
        assert_eq!(summary.tier, LoyaltyTier::Bronze);
    }

    #[test]
    fn punctuality_is_the_on_time_share() {
        let summary = LoyaltySummary::from(LoyaltyTotals {
            tenant_id: 5,
            points: 84,
            on_time_count: 6,
            total_count: 8,
        });
        assert_eq!(summary.punctuality, 0.75);
    }

    #[test]
    fn late_payments_still_accrue_a_little() {
        assert_eq!(payment_points(true), 10);
        assert_eq!(payment_points(false), 2);
    }
}
