mod common;

use serde_json::json;
use std::time::Duration;
use weather_alerts::{Config, FetchErrorKind, JsonFetcher, NwsClient};

fn client() -> NwsClient {
    NwsClient::new(&Config::default())
}

#[tokio::test]
async fn test_fetch_returns_json_body() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/alerts/active/area/TX", common::base_url(addr));

    let body = client().fetch(&url).await.expect("fetch should succeed");
    assert_eq!(body, common::texas_alerts());
}

#[tokio::test]
async fn test_fetch_returns_arrays_unchanged() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/list", common::base_url(addr));

    let body = client().fetch(&url).await.expect("fetch should succeed");
    assert_eq!(body, json!([1, 2, 3]));
}

#[tokio::test]
async fn test_fetch_sends_fixed_headers() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/headers", common::base_url(addr));

    let body = client().fetch(&url).await.expect("fetch should succeed");
    assert_eq!(body["user_agent"], json!("weather-app/1.0"));
    assert_eq!(body["accept"], json!("application/geo+json"));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/html", common::base_url(addr));

    let err = client().fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Decode);
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_error_status_is_status_error() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/missing", common::base_url(addr));

    let err = client().fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Status);
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_redirect_is_not_followed() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/moved", common::base_url(addr));

    let err = client().fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Status);
    assert!(err.to_string().contains("302"));
}

#[tokio::test]
async fn test_connection_refused_is_connect_error() {
    let addr = common::closed_addr().await;
    let url = format!("{}/alerts/active/area/TX", common::base_url(addr));

    let err = client().fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Connect);
}

#[tokio::test]
async fn test_slow_response_is_timeout_error() {
    let addr = common::serve(common::nws_router()).await;
    let url = format!("{}/slow", common::base_url(addr));
    let config = Config {
        request_timeout: Duration::from_millis(200),
        ..Config::default()
    };

    let err = NwsClient::new(&config).fetch(&url).await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Timeout);
}

#[tokio::test]
async fn test_get_alert_against_local_api() {
    let addr = common::serve(common::nws_router()).await;
    let base = common::base_url(addr);
    let client = client();

    let alerts = match weather_alerts::get_alert(&client, &base, "TX").await {
        weather_alerts::AlertOutcome::Alerts(alerts) => alerts,
        other => panic!("expected alerts, got {other:?}"),
    };
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].area, Some(json!("Travis County")));
    assert_eq!(alerts[1].sender, Some(json!("NWS Austin/San Antonio TX")));

    let outcome = weather_alerts::get_alert(&client, &base, "VT").await;
    assert_eq!(outcome.to_string(), "No active alerts");

    let outcome = weather_alerts::get_alert(&client, &base, "ZZ").await;
    assert_eq!(outcome.to_string(), "Unable to get alert");
}
