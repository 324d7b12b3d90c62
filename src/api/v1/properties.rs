use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::properties::{
    Apartment, Building, CreateApartmentRequest, CreateBuildingRequest,
};
use crate::models::sessions::Session;
use crate::usecases::properties;
use axum::Json;
use axum::extract::Path;

pub async fn create_building(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<CreateBuildingRequest>,
) -> ServiceResponse<Building> {
    session.require_staff()?;
    let building = properties::create_building(&ctx, &request).await?;
    Ok(Json(building))
}

pub async fn list_buildings(
    ctx: RequestContext,
    session: Session,
) -> ServiceResponse<Vec<Building>> {
    session.require_staff()?;
    let buildings = properties::fetch_all_buildings(&ctx).await?;
    Ok(Json(buildings))
}

pub async fn get_building(
    ctx: RequestContext,
    session: Session,
    Path(building_id): Path<i64>,
) -> ServiceResponse<Building> {
    session.require_staff()?;
    let building = properties::fetch_building(&ctx, building_id).await?;
    Ok(Json(building))
}

pub async fn list_building_apartments(
    ctx: RequestContext,
    session: Session,
    Path(building_id): Path<i64>,
) -> ServiceResponse<Vec<Apartment>> {
    session.require_staff()?;
    let apartments = properties::fetch_apartments_by_building(&ctx, building_id).await?;
    Ok(Json(apartments))
}

pub async fn create_apartment(
    ctx: RequestContext,
    session: Session,
    Json(request): Json<CreateApartmentRequest>,
) -> ServiceResponse<Apartment> {
    session.require_staff()?;
    let apartment = properties::create_apartment(&ctx, &request).await?;
    Ok(Json(apartment))
}

pub async fn get_apartment(
    ctx: RequestContext,
    session: Session,
    Path(apartment_id): Path<i64>,
) -> ServiceResponse<Apartment> {
    session.require_staff()?;
    let apartment = properties::fetch_apartment(&ctx, apartment_id).await?;
    Ok(Json(apartment))
}
