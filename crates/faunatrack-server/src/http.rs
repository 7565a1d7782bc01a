// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use faunatrack_api::{
    parse_animals_params, validate_submission, AnimalsView, ApiError, ApiErrorCode,
    SubmitSightingRequest, API_VERSION,
};
use serde_json::json;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::info;

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

pub(crate) fn put_cache_headers(headers: &mut HeaderMap, ttl: Duration, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl.as_secs())) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

#[must_use]
pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::InvalidQueryParameter
        | ApiErrorCode::ValidationFailed
        | ApiErrorCode::UnknownSpecies => StatusCode::BAD_REQUEST,
        ApiErrorCode::NotReady => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError, request_id: &str) -> Response {
    let status = api_error_status(err.code);
    let body = Json(json!({"error": err.with_request_id(request_id)}));
    let mut resp = (status, body).into_response();
    if status == StatusCode::SERVICE_UNAVAILABLE {
        resp.headers_mut()
            .insert("retry-after", HeaderValue::from_static("3"));
    }
    with_request_id(resp, request_id)
}

pub(crate) async fn animals_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let view = match parse_animals_params(&params) {
        Ok(view) => view,
        Err(err) => {
            state
                .metrics
                .observe_request("/api/animals", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return api_error_response(err, &request_id);
        }
    };
    let result = match view {
        AnimalsView::Species => state
            .store
            .list_species()
            .await
            .and_then(|records| serde_json::to_value(records).map_err(store_encode_error)),
        AnimalsView::Sightings => state
            .store
            .list_sightings()
            .await
            .and_then(|records| serde_json::to_value(records).map_err(store_encode_error)),
    };
    match result {
        Ok(payload) => {
            state
                .metrics
                .observe_request("/api/animals", StatusCode::OK, started.elapsed())
                .await;
            with_request_id(Json(payload).into_response(), &request_id)
        }
        Err(err) => {
            state
                .metrics
                .observe_request(
                    "/api/animals",
                    StatusCode::INTERNAL_SERVER_ERROR,
                    started.elapsed(),
                )
                .await;
            api_error_response(ApiError::internal(&err.to_string()), &request_id)
        }
    }
}

fn store_encode_error(err: serde_json::Error) -> faunatrack_store::StoreError {
    faunatrack_store::StoreError::InvalidRecord(err.to_string())
}

/// True when every reported field error is a failed species resolution,
/// which the contract surfaces under its own error code.
fn is_unknown_species(errors: &[faunatrack_api::FieldError]) -> bool {
    !errors.is_empty()
        && errors
            .iter()
            .all(|err| err.field == "species" || err.field == "animal_id")
        && errors.iter().any(|err| {
            err.reason.contains("no such species")
                || err.reason.contains("does not match any catalogued species")
        })
}

pub(crate) async fn submit_sighting_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
    body: Result<Json<SubmitSightingRequest>, JsonRejection>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);

    match parse_animals_params(&params) {
        Ok(AnimalsView::Sightings) => {}
        Ok(AnimalsView::Species) => {
            state
                .metrics
                .observe_request("/api/animals", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return api_error_response(
                ApiError::invalid_param("type", "sightings is the only accepted POST target"),
                &request_id,
            );
        }
        Err(err) => {
            state
                .metrics
                .observe_request("/api/animals", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return api_error_response(err, &request_id);
        }
    }

    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            state
                .metrics
                .observe_request("/api/animals", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return api_error_response(
                ApiError::validation_failed(
                    json!([{"field": "body", "reason": rejection.body_text()}]),
                ),
                &request_id,
            );
        }
    };

    let catalog = match state.store.list_species().await {
        Ok(catalog) => catalog,
        Err(err) => {
            state
                .metrics
                .observe_request(
                    "/api/animals",
                    StatusCode::INTERNAL_SERVER_ERROR,
                    started.elapsed(),
                )
                .await;
            return api_error_response(ApiError::internal(&err.to_string()), &request_id);
        }
    };

    let today = Utc::now().date_naive();
    let sighting = match validate_submission(&request, &catalog, today) {
        Ok(sighting) => sighting,
        Err(errors) => {
            state
                .metrics
                .observe_request("/api/animals", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            let err = if is_unknown_species(&errors) {
                ApiError::unknown_species(request.species.trim())
            } else {
                ApiError::validation_failed(json!(errors))
            };
            return api_error_response(err, &request_id);
        }
    };

    match state.store.append_sighting(sighting).await {
        Ok(record) => {
            state
                .metrics
                .sightings_created_total
                .fetch_add(1, Ordering::Relaxed);
            info!(
                request_id = %request_id,
                sighting_id = record.id.get(),
                species = %record.species,
                "sighting recorded"
            );
            state
                .metrics
                .observe_request("/api/animals", StatusCode::CREATED, started.elapsed())
                .await;
            with_request_id(
                (StatusCode::CREATED, Json(record)).into_response(),
                &request_id,
            )
        }
        Err(err) => {
            state
                .metrics
                .observe_request(
                    "/api/animals",
                    StatusCode::INTERNAL_SERVER_ERROR,
                    started.elapsed(),
                )
                .await;
            api_error_response(ApiError::internal(&err.to_string()), &request_id)
        }
    }
}

pub(crate) async fn stats_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let as_of = Utc::now().date_naive();
    let snapshot = match state.store.stats(as_of).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            let api_err = match err {
                faunatrack_store::StoreError::NotSeeded => ApiError::not_ready(),
                other => ApiError::internal(&other.to_string()),
            };
            state
                .metrics
                .observe_request("/api/stats", api_error_status(api_err.code), started.elapsed())
                .await;
            return api_error_response(api_err, &request_id);
        }
    };
    let body = match serde_json::to_vec(&snapshot) {
        Ok(body) => body,
        Err(err) => {
            state
                .metrics
                .observe_request(
                    "/api/stats",
                    StatusCode::INTERNAL_SERVER_ERROR,
                    started.elapsed(),
                )
                .await;
            return api_error_response(ApiError::internal(&err.to_string()), &request_id);
        }
    };
    let etag = format!("\"{}\"", sha256_hex(&body));
    if if_none_match(&headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), state.api.stats_ttl, &etag);
        state
            .metrics
            .observe_request("/api/stats", StatusCode::NOT_MODIFIED, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    }
    // Serve the bytes the etag was computed over, not a re-encoding.
    let mut resp = (
        [(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response();
    put_cache_headers(resp.headers_mut(), state.api.stats_ttl, &etag);
    state
        .metrics
        .observe_request("/api/stats", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}

pub(crate) async fn readyz_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let seeded = !state.api.readiness_requires_seed || state.store.is_seeded();
    if state.ready.load(Ordering::Relaxed) && seeded {
        with_request_id("ready".into_response(), &request_id)
    } else {
        api_error_response(ApiError::not_ready(), &request_id)
    }
}

pub(crate) async fn version_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let payload = json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "api": API_VERSION,
    });
    with_request_id(Json(payload).into_response(), &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> Response {
    let body = state.metrics.render().await;
    (
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}

pub(crate) async fn landing_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let payload = json!({
        "service": crate::CRATE_NAME,
        "api": API_VERSION,
        "endpoints": [
            "/api/animals",
            "/api/animals?type=sightings",
            "/api/stats",
            "/api/version",
            "/healthz",
            "/readyz",
            "/metrics",
        ],
    });
    with_request_id(Json(payload).into_response(), &request_id)
}
