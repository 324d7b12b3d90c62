pub mod applications;
pub mod auth;
pub mod conversations;
pub mod documents;
pub mod incidents;
pub mod leases;
pub mod loyalty;
pub mod payments;
pub mod properties;
pub mod tenants;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route(
            "/buildings",
            get(properties::list_buildings).post(properties::create_building),
        )
        .route("/buildings/{building_id}", get(properties::get_building))
        .route(
            "/buildings/{building_id}/apartments",
            get(properties::list_building_apartments),
        )
        .route("/apartments", post(properties::create_apartment))
        .route("/apartments/{apartment_id}", get(properties::get_apartment))
        .route("/tenants", get(tenants::list).post(tenants::create))
        .route("/tenants/{tenant_id}/leases", get(leases::list_for_tenant))
        .route("/tenants/{tenant_id}/loyalty", get(loyalty::tenant_summary))
        .route("/leases", post(leases::create))
        .route("/leases/{lease_id}", get(leases::get))
        .route("/leases/{lease_id}/terminate", post(leases::terminate))
        .route("/leases/{lease_id}/payments", get(payments::list_for_lease))
        .route("/payments", post(payments::record))
        .route("/loyalty/me", get(loyalty::my_summary))
        .route("/loyalty/overview", get(loyalty::overview))
        .route(
            "/incidents",
            get(incidents::list).post(incidents::create),
        )
        .route(
            "/incidents/{incident_id}/status",
            post(incidents::update_status),
        )
        .route("/documents", post(documents::upload))
        .route("/documents/me", get(documents::list_mine))
        .route("/users/{user_id}/documents", get(documents::list_for_user))
        .route(
            "/applications",
            get(applications::list).post(applications::submit),
        )
        .route(
            "/applications/{application_id}/accept",
            post(applications::accept),
        )
        .route(
            "/applications/{application_id}/reject",
            post(applications::reject),
        )
        .route(
            "/conversations",
            get(conversations::list).post(conversations::create),
        )
        .route("/conversations/{conversation_id}", get(conversations::get))
        .route(
            "/conversations/{conversation_id}/messages",
            get(conversations::list_messages).post(conversations::send_message),
        )
        .route(
            "/conversations/{conversation_id}/read",
            post(conversations::mark_read),
        )
}
