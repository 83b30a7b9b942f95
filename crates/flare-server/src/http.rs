use crate::metrics;
use crate::state::AppState;
use crate::uploads;
use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use flare_core::incident::{Incident, IncidentDraft, Location};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::error;
use uuid::Uuid;

#[derive(Deserialize)]
struct CreateIncidentRequest {
    title: String,
    #[serde(default)]
    description: String,
    incident_type: String,
    location: Option<Location>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_seconds: u64,
    incidents: usize,
}

pub fn router(state: AppState) -> Router {
    // Permissive CORS so the dev frontend on another port can talk to us.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/incidents",
            get(list_incidents_handler).post(create_incident_handler),
        )
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest_service("/uploads", ServeDir::new(state.uploads_dir.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

async fn list_incidents_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list())
}

async fn create_incident_handler(State(state): State<AppState>, req: Request) -> Response {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let draft = if content_type.starts_with("multipart/form-data") {
        let multipart = match Multipart::from_request(req, &()).await {
            Ok(multipart) => multipart,
            Err(_) => return bad_request("invalid form-data"),
        };
        match read_multipart(&state, multipart).await {
            Ok(draft) => draft,
            Err(response) => return response,
        }
    } else {
        match Json::<CreateIncidentRequest>::from_request(req, &()).await {
            Ok(Json(body)) => IncidentDraft {
                title: body.title,
                description: body.description,
                incident_type: body.incident_type,
                location: body.location,
                image_url: None,
            },
            Err(_) => return bad_request("invalid JSON payload"),
        }
    };

    let incident = match Incident::build(draft, Uuid::new_v4().to_string(), Utc::now()) {
        Ok(incident) => incident,
        Err(e) => {
            metrics::record_incident_rejected();
            return bad_request(&e.to_string());
        }
    };

    state.store.add(incident.clone());
    metrics::record_incident_submitted(incident.incident_type.as_str());
    metrics::update_store_size(state.store.len());

    (StatusCode::CREATED, Json(incident)).into_response()
}

async fn read_multipart(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<IncidentDraft, Response> {
    let mut draft = IncidentDraft::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => return Err(bad_request("invalid form-data")),
        };
        let name = field.name().map(str::to_owned);

        match name.as_deref() {
            Some("title") => draft.title = read_text(field).await?,
            Some("description") => draft.description = read_text(field).await?,
            Some("incident_type") => draft.incident_type = read_text(field).await?,
            Some("image") => {
                let original_name = field.file_name().map(str::to_owned);
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(_) => return Err(bad_request("invalid form-data")),
                };
                // Browsers send an empty part for an untouched file input.
                if bytes.is_empty() {
                    continue;
                }
                match uploads::save_image(&state.uploads_dir, original_name.as_deref(), &bytes) {
                    Ok(url) => {
                        metrics::record_upload_saved();
                        draft.image_url = Some(url);
                    }
                    Err(e) => {
                        error!("Failed to save uploaded image: {}", e);
                        return Err(internal_error("failed to save file"));
                    }
                }
            }
            _ => {}
        }
    }

    Ok(draft)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, Response> {
    field
        .text()
        .await
        .map_err(|_| bad_request("invalid form-data"))
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        uptime_seconds: state.uptime_seconds(),
        incidents: state.store.len(),
    })
}

async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
