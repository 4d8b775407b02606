use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{rank_buildings, BuildingDirectory};
use crate::models::{ErrorResponse, HealthResponse, LocationPolicy, LocationRequest, MessageResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<BuildingDirectory>,
    pub service_name: String,
    pub location_policy: LocationPolicy,
}

/// Configure all classroom-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/test", web::get().to(api_test))
        .route("/health", web::get().to(health_check))
        .route("/open-classrooms", web::get().to(list_open_classrooms))
        .route("/open-classrooms", web::post().to(find_open_classrooms));
}

/// Liveness probe
async fn api_test(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: format!("{} API is working!", state.service_name),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        buildings: state.directory.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// List buildings in directory order
///
/// GET /api/open-classrooms
async fn list_open_classrooms(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(rank_buildings(&state.directory, None))
}

/// List buildings nearest first
///
/// POST /api/open-classrooms
///
/// Request body:
/// ```json
/// {
///   "lat": 47.918,
///   "lng": 106.917
/// }
/// ```
///
/// A missing or unreadable body lists the buildings unranked.
async fn find_open_classrooms(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let req = LocationRequest::from_body(&body);

    if state.location_policy.validate_coordinates {
        if let Err(errors) = req.validate() {
            tracing::info!("Rejected location lat={:?}, lng={:?}: {}", req.lat, req.lng, errors);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: errors.to_string(),
                status_code: 400,
            });
        }
    }

    let user_location = req.user_location(&state.location_policy);
    let buildings = rank_buildings(&state.directory, user_location);

    match user_location {
        Some(point) => tracing::debug!(
            "Ranked {} buildings from ({}, {}), nearest: {}",
            buildings.len(),
            point.latitude,
            point.longitude,
            buildings.first().map(|b| b.building_code.as_str()).unwrap_or("-")
        ),
        None => tracing::debug!("No user location, listing {} buildings unranked", buildings.len()),
    }

    HttpResponse::Ok().json(buildings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn state(policy: LocationPolicy) -> AppState {
        AppState {
            directory: Arc::new(BuildingDirectory::builtin()),
            service_name: "NUM Atlas".to_string(),
            location_policy: policy,
        }
    }

    #[actix_web::test]
    async fn test_api_test_message() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(LocationPolicy::default())))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let body: MessageResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.message, "NUM Atlas API is working!");
    }

    #[actix_web::test]
    async fn test_validation_rejects_out_of_range() {
        let policy = LocationPolicy { validate_coordinates: true, ..Default::default() };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(policy)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/open-classrooms")
            .set_json(serde_json::json!({"lat": 95.0, "lng": 106.9}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
