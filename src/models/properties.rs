use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::entities::properties::{Apartment as ApartmentEntity, Building as BuildingEntity};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Building {
    pub building_id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<BuildingEntity> for Building {
    fn from(value: BuildingEntity) -> Self {
        Self {
            building_id: value.id,
            name: value.name,
            address: value.address,
            city: value.city,
            postal_code: value.postal_code,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApartmentStatus {
    Vacant,
    Occupied,
    Maintenance,
}

impl ApartmentStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApartmentStatus::Vacant => "vacant",
            ApartmentStatus::Occupied => "occupied",
            ApartmentStatus::Maintenance => "maintenance",
        }
    }

    pub fn parse(raw: &str) -> ServiceResult<Self> {
        match raw {
            "vacant" => Ok(ApartmentStatus::Vacant),
            "occupied" => Ok(ApartmentStatus::Occupied),
            "maintenance" => Ok(ApartmentStatus::Maintenance),
            other => unexpected(anyhow::anyhow!("unknown apartment status: {other}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Apartment {
    pub apartment_id: i64,
    pub building_id: i64,
    pub number: String,
    pub floor: i32,
    pub surface_m2: f64,
    pub rent_amount: Decimal,
    pub charges_amount: Decimal,
    pub status: ApartmentStatus,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ApartmentEntity> for Apartment {
    type Error = AppError;

    fn try_from(value: ApartmentEntity) -> ServiceResult<Self> {
        Ok(Self {
            apartment_id: value.id,
            building_id: value.building_id,
            number: value.number,
            floor: value.floor,
            surface_m2: value.surface_m2,
            rent_amount: value.rent_amount,
            charges_amount: value.charges_amount,
            status: ApartmentStatus::parse(&value.status)?,
            created_at: value.created_at,
        })
    }
}

#[derive(Deserialize)]
pub struct CreateBuildingRequest {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Deserialize)]
pub struct CreateApartmentRequest {
    pub building_id: i64,
    pub number: String,
    pub floor: i32,
    pub surface_m2: f64,
    pub rent_amount: Decimal,
    pub charges_amount: Decimal,
}
