mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{RecordingNotifier, StubOutcome, create_test_state, unconfigured_state};
use lead_capture::routes::app_router;

#[tokio::test]
async fn test_health_ok_when_record_store_configured() {
    let (state, _repository, _notifier) =
        create_test_state(StubOutcome::Success, RecordingNotifier::succeeding());
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["record_store"]["status"], "ok");
    assert_eq!(json["checks"]["notifier"]["message"], "Provider: stub");
}

#[tokio::test]
async fn test_health_degraded_without_record_store() {
    let server = TestServer::new(app_router(unconfigured_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["record_store"]["status"], "error");
}
