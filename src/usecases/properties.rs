use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::properties::{
    Apartment, Building, CreateApartmentRequest, CreateBuildingRequest,
};
use crate::repositories::properties;

pub async fn create_building<C: Context>(
    ctx: &C,
    request: &CreateBuildingRequest,
) -> ServiceResult<Building> {
    let building_id = properties::create_building(ctx, request).await?;
    fetch_building(ctx, building_id as i64).await
}

pub async fn fetch_building<C: Context>(ctx: &C, building_id: i64) -> ServiceResult<Building> {
    match properties::fetch_building(ctx, building_id).await {
        Ok(building) => Ok(Building::from(building)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::BuildingsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all_buildings<C: Context>(ctx: &C) -> ServiceResult<Vec<Building>> {
    let buildings = properties::fetch_all_buildings(ctx).await?;
    Ok(buildings.into_iter().map(Building::from).collect())
}

pub async fn create_apartment<C: Context>(
    ctx: &C,
    request: &CreateApartmentRequest,
) -> ServiceResult<Apartment> {
    // Surface a missing building as such instead of a foreign key error.
    fetch_building(ctx, request.building_id).await?;
    let apartment_id = properties::create_apartment(ctx, request).await?;
    fetch_apartment(ctx, apartment_id as i64).await
}

pub async fn fetch_apartment<C: Context>(ctx: &C, apartment_id: i64) -> ServiceResult<Apartment> {
    match properties::fetch_apartment(ctx, apartment_id).await {
        Ok(apartment) => Apartment::try_from(apartment),
        Err(sqlx::Error::RowNotFound) => Err(AppError::ApartmentsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_apartments_by_building<C: Context>(
    ctx: &C,
    building_id: i64,
) -> ServiceResult<Vec<Apartment>> {
    fetch_building(ctx, building_id).await?;
    let apartments = properties::fetch_apartments_by_building(ctx, building_id).await?;
    apartments.into_iter().map(Apartment::try_from).collect()
}
