//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::catalog::{PortRecord, Region};
use crate::error::Error;
use crate::format::{available_formats, share};
use crate::itinerary::{plan, Itinerary, PlanRequest};
use crate::route::{rings, RouteRequest};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then fallback next to the executable
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join("static");
            if path.exists() {
                path.to_string_lossy().to_string()
            } else {
                "static".to_string()
            }
        } else {
            "static".to_string()
        }
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/plan", post(plan_handler))
        .route("/api/route", post(route_handler))
        .route("/api/ports", get(ports_handler))
        .route("/api/resolve", get(resolve_handler))
        .route("/api/regions", get(regions_handler))
        .route("/api/formats", get(formats_handler))
        .route("/api/share", post(share_handler))
        .route("/api/status", get(status_handler))
        .nest_service(
            "/",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidRequest(_) => "INVALID_REQUEST",
            Error::UnresolvedPort(_) => "UNRESOLVED_PORT",
            Error::Config(_) => "CONFIG_ERROR",
            Error::ShareLink(_) => "SHARE_LINK_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Plan an itinerary
///
/// POST /api/plan
async fn plan_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Itinerary>, ApiError> {
    let itinerary = plan(state.catalog(), &req).map_err(ApiError::from)?;
    Ok(Json(itinerary))
}

/// Route-only response: the stop sequence without leg estimates
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub stops: Vec<String>,
    pub days: u32,
}

/// Build a stop sequence without estimating legs
///
/// POST /api/route
async fn route_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    req.validate().map_err(ApiError::from)?;
    let stops = req
        .build(state.catalog())
        .ok_or_else(|| ApiError::from(Error::UnresolvedPort("custom stop".to_string())))?;
    Ok(Json(RouteResponse {
        days: stops.len() as u32 - 1,
        stops,
    }))
}

/// Port list query
#[derive(Debug, Deserialize)]
pub struct PortsQuery {
    /// Restrict to one region
    pub region: Option<Region>,
}

/// Ports list response
#[derive(Debug, Serialize, Deserialize)]
pub struct PortsResponse {
    pub ports: Vec<PortRecord>,
    pub count: usize,
}

/// List catalog ports, optionally by region
///
/// GET /api/ports?region=saronic
async fn ports_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PortsQuery>,
) -> Json<PortsResponse> {
    let ports: Vec<PortRecord> = state
        .catalog()
        .records()
        .iter()
        .filter(|r| query.region.map(|region| r.region == region).unwrap_or(true))
        .cloned()
        .collect();
    Json(PortsResponse {
        count: ports.len(),
        ports,
    })
}

/// Resolve query
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub q: String,
}

/// Resolve a free-text name to a port record
///
/// GET /api/resolve?q=spetses
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<PortRecord>, (StatusCode, Json<ApiError>)> {
    state
        .catalog()
        .resolve(&query.q)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError {
                    error: format!("No port matches: {}", query.q),
                    code: "UNRESOLVED_PORT".to_string(),
                }),
            )
        })
}

/// Region info for pickers
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionInfo {
    pub key: String,
    pub name: String,
    pub ring: Vec<String>,
}

/// Regions list response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<RegionInfo>,
}

/// List regions with their cruising rings
///
/// GET /api/regions
async fn regions_handler() -> Json<RegionsResponse> {
    let regions = Region::all()
        .into_iter()
        .map(|region| RegionInfo {
            key: region.to_string(),
            name: region.display_name().to_string(),
            ring: rings::ring(region).iter().map(|s| s.to_string()).collect(),
        })
        .collect();
    Json(RegionsResponse { regions })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    let formats = available_formats()
        .into_iter()
        .map(|f| FormatInfo {
            name: f.name,
            description: f.description,
        })
        .collect();

    Json(FormatsResponse { formats })
}

/// Share link response
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub url: String,
    pub params: String,
}

/// Create a shareable plan link
///
/// POST /api/share
async fn share_handler(
    Json(req): Json<PlanRequest>,
) -> Result<Json<ShareResponse>, ApiError> {
    let params = share::encode(&req).map_err(ApiError::from)?;
    // The frontend constructs the full URL from its own origin
    Ok(Json(ShareResponse {
        url: format!("/plan?{}", params),
        params,
    }))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Catalog size
    pub ports: usize,
    /// Number of regions
    pub regions: usize,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        ports: state.catalog().len(),
        regions: Region::all().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(crate::config::Config::default()))
    }

    fn plan_body() -> serde_json::Value {
        serde_json::json!({
            "mode": "region",
            "start": "Alimos",
            "end": "Alimos",
            "days": 2,
            "region": "saronic",
            "yacht": {
                "type": "motor",
                "cruise_speed_knots": 20.0,
                "liters_per_hour": 180.0,
                "price_per_liter": 1.80,
                "departure_time": "09:00:00"
            },
            "start_date": "2026-06-06"
        })
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert!(status.ports > 40);
        assert_eq!(status.regions, 7);
    }

    #[tokio::test]
    async fn test_plan_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/plan")
                    .header("Content-Type", "application/json")
                    .body(Body::from(plan_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let itinerary: Itinerary = serde_json::from_slice(&body).unwrap();

        assert_eq!(itinerary.stops.len(), 3);
        assert_eq!(itinerary.days.len(), 2);
    }

    #[tokio::test]
    async fn test_plan_endpoint_rejects_short_trip() {
        let app = create_router(create_test_state());

        let mut body = plan_body();
        body["days"] = serde_json::json!(1);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/plan")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_plan_endpoint_rejects_zero_speed() {
        let app = create_router(create_test_state());

        let mut body = plan_body();
        body["yacht"]["cruise_speed_knots"] = serde_json::json!(0.0);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/plan")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_route_endpoint_custom_unresolvable() {
        let app = create_router(create_test_state());

        let body = serde_json::json!({
            "mode": "custom",
            "start": "Alimos",
            "day_stops": ["Unknownzzz"]
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/route")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "UNRESOLVED_PORT");
    }

    #[tokio::test]
    async fn test_ports_endpoint_with_region_filter() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/ports?region=saronic")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let ports: PortsResponse = serde_json::from_slice(&body).unwrap();

        assert!(ports.count > 0);
        assert!(ports.ports.iter().all(|p| p.region == Region::Saronic));
    }

    #[tokio::test]
    async fn test_resolve_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/resolve?q=zante")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let record: PortRecord = serde_json::from_slice(&body).unwrap();
        assert_eq!(record.id, "zakynthos");
    }

    #[tokio::test]
    async fn test_resolve_endpoint_not_found() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/resolve?q=Unknownzzz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_regions_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/regions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let regions: RegionsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(regions.regions.len(), 7);
        assert!(regions.regions.iter().all(|r| !r.ring.is_empty()));
    }

    #[tokio::test]
    async fn test_formats_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/formats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let formats: FormatsResponse = serde_json::from_slice(&body).unwrap();
        assert!(!formats.formats.is_empty());
    }

    #[tokio::test]
    async fn test_share_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/share")
                    .header("Content-Type", "application/json")
                    .body(Body::from(plan_body().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let share: ShareResponse = serde_json::from_slice(&body).unwrap();
        assert!(share.url.starts_with("/plan?plan="));
        assert!(share.params.starts_with("plan="));
    }
}
