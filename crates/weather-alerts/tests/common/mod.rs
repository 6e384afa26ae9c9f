//! Common test utilities and fixtures
//!
//! Spins up a throwaway HTTP server standing in for the NWS API.

#![allow(dead_code)]

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::time::Duration;

/// Serve `router` on an ephemeral local port and return its address
pub async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener should have an address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    addr
}

/// Base URL for a server started with [`serve`]
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

/// An address nothing is listening on
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    listener.local_addr().expect("Listener should have an address")
}

/// Alert payload shaped like the NWS `/alerts/active/area/{state}` response
pub fn texas_alerts() -> Value {
    json!({
        "type": "FeatureCollection",
        "title": "Current watches, warnings, and advisories for Texas",
        "features": [
            {
                "id": "https://api.weather.gov/alerts/A1",
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "id": "A1",
                    "event": "Flood Warning",
                    "areaDesc": "Travis County"
                }
            },
            {
                "id": "https://api.weather.gov/alerts/A2",
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "id": "A2",
                    "event": "Heat Advisory",
                    "areaDesc": "Bexar County",
                    "severity": "Moderate",
                    "senderName": "NWS Austin/San Antonio TX"
                }
            }
        ]
    })
}

/// Router mimicking the alerts endpoint plus a few failure modes
pub fn nws_router() -> Router {
    Router::new()
        .route(
            "/alerts/active/area/{state}",
            get(|axum::extract::Path(state): axum::extract::Path<String>| async move {
                let body = match state.as_str() {
                    "TX" => texas_alerts(),
                    "VT" => json!({"type": "FeatureCollection", "features": []}),
                    _ => {
                        return (
                            StatusCode::BAD_REQUEST,
                            axum::Json(json!({"title": "Bad Request", "status": 400})),
                        )
                            .into_response();
                    }
                };
                axum::Json(body).into_response()
            }),
        )
        .route(
            "/headers",
            get(|headers: HeaderMap| async move {
                let value = |name: header::HeaderName| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                axum::Json(json!({
                    "user_agent": value(header::USER_AGENT),
                    "accept": value(header::ACCEPT),
                }))
            }),
        )
        .route("/html", get(|| async { "<html><body>maintenance</body></html>" }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, axum::Json(json!({"status": 404}))) }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                axum::Json(json!({}))
            }),
        )
        .route("/list", get(|| async { axum::Json(json!([1, 2, 3])) }))
        .route(
            "/moved",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/list")]) }),
        )
}
