use crate::common::context::Context;
use crate::entities::properties::{Apartment, Building};
use crate::models::properties::{
    ApartmentStatus, CreateApartmentRequest, CreateBuildingRequest,
};

const BUILDINGS_TABLE: &str = "buildings";
const BUILDING_FIELDS: &str = "id, name, address, city, postal_code, created_at";

const APARTMENTS_TABLE: &str = "apartments";
const APARTMENT_FIELDS: &str =
    "id, building_id, number, floor, surface_m2, rent_amount, charges_amount, status, created_at";

pub async fn create_building<C: Context>(
    ctx: &C,
    args: &CreateBuildingRequest,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        BUILDINGS_TABLE,
        " (name, address, city, postal_code) VALUES (?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(&args.name)
        .bind(&args.address)
        .bind(&args.city)
        .bind(&args.postal_code)
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_building<C: Context>(ctx: &C, building_id: i64) -> sqlx::Result<Building> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        BUILDING_FIELDS,
        " FROM ",
        BUILDINGS_TABLE,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(building_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all_buildings<C: Context>(ctx: &C) -> sqlx::Result<Vec<Building>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        BUILDING_FIELDS,
        " FROM ",
        BUILDINGS_TABLE,
        " ORDER BY city, name"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

pub async fn create_apartment<C: Context>(
    ctx: &C,
    args: &CreateApartmentRequest,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        APARTMENTS_TABLE,
        " (building_id, number, floor, surface_m2, rent_amount, charges_amount, status) ",
        "VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(args.building_id)
        .bind(&args.number)
        .bind(args.floor)
        .bind(args.surface_m2)
        .bind(args.rent_amount)
        .bind(args.charges_amount)
        .bind(ApartmentStatus::Vacant.as_str())
        .execute(ctx.db())
        .await?;
    Ok(result.last_insert_id())
}

pub async fn fetch_apartment<C: Context>(ctx: &C, apartment_id: i64) -> sqlx::Result<Apartment> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        APARTMENT_FIELDS,
        " FROM ",
        APARTMENTS_TABLE,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(apartment_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_apartments_by_building<C: Context>(
    ctx: &C,
    building_id: i64,
) -> sqlx::Result<Vec<Apartment>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        APARTMENT_FIELDS,
        " FROM ",
        APARTMENTS_TABLE,
        " WHERE building_id = ? ORDER BY floor, number"
    );
    sqlx::query_as(QUERY)
        .bind(building_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn update_apartment_status<C: Context>(
    ctx: &C,
    apartment_id: i64,
    status: ApartmentStatus,
) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        APARTMENTS_TABLE,
        " SET status = ? WHERE id = ?"
    );
    sqlx::query(QUERY)
        .bind(status.as_str())
        .bind(apartment_id)
        .execute(ctx.db())
        .await?;
    Ok(())
}
