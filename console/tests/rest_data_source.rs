//! REST data source against a mocked back end.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hrconsole_console::api::ApiClient;
use hrconsole_console::data_source::RestDataSource;
use hrconsole_core::config::ScreenDefaults;
use hrconsole_core::models::{AttendanceRequest, Branch, Decision, LeaveType, RequestStatus};
use hrconsole_core::screen::ApprovalScreen;
use hrconsole_core::services::{DataSource, DecisionPayload, DecisionSource, RecordingNotifier};
use hrconsole_core::{DataSourceError, RecordId};

fn client(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new_with_base_url(format!("{}/api", server.uri())))
}

fn attendance_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "emp_id": "EMP2001",
        "employee_name": "Test Person",
        "branch": "Head Office",
        "department": "IT",
        "date": "2025-03-03",
        "original_snapshot": { "clock_in_time": null, "clock_out_time": "2025-03-03T18:00:00" },
        "proposed_values": { "clock_in_time": "2025-03-03T09:00:00", "clock_out_time": "2025-03-03T18:00:00" },
        "reason": "Badge forgotten",
        "status": status
    })
}

#[tokio::test]
async fn fetches_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "br-01", "code": "HQ", "name": "Head Office", "city": "Mumbai" },
            { "id": "br-02", "code": "NZ", "name": "North Zone", "city": "Delhi", "is_active": false }
        ])))
        .mount(&server)
        .await;

    let source = RestDataSource::<Branch>::new(client(&server));
    let branches = source.fetch_all().await.unwrap();

    assert_eq!(branches.len(), 2);
    assert!(branches[0].is_active);
    assert!(!branches[1].is_active);
}

#[tokio::test]
async fn fetches_kind_envelope_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leave-types"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "leave_types": [
                { "id": 1, "code": "AL", "name": "Annual Leave", "annual_credits": 18, "is_paid": true }
            ],
            "total": 1
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new_with_base_url(format!("{}/api", server.uri())).with_token("secret-token");
    let source = RestDataSource::<LeaveType>::new(Arc::new(api));
    let types = source.fetch_all().await.unwrap();

    assert_eq!(types.len(), 1);
    assert_eq!(types[0].id, RecordId::from(1));
}

#[tokio::test]
async fn fetches_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/attendance-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [attendance_json("att-101", "pending")]
        })))
        .mount(&server)
        .await;

    let source = RestDataSource::<AttendanceRequest>::new(client(&server));
    let requests = source.fetch_all().await.unwrap();

    assert_eq!(requests[0].id, RecordId::from("att-101"));
    assert_eq!(requests[0].status, RequestStatus::Pending);
    assert!(!requests[0].original.is_complete());
}

#[tokio::test]
async fn server_error_maps_to_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Database unavailable",
            "code": "INTERNAL_ERROR"
        })))
        .mount(&server)
        .await;

    let err = RestDataSource::<Branch>::new(client(&server))
        .fetch_all()
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DataSourceError::Rejected {
            status: 500,
            message: "Database unavailable".into()
        }
    );
}

#[tokio::test]
async fn malformed_payload_maps_to_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let err = RestDataSource::<Branch>::new(client(&server))
        .fetch_all()
        .await
        .unwrap_err();

    assert!(matches!(err, DataSourceError::Payload(_)));
}

#[tokio::test]
async fn unreachable_back_end_maps_to_transport() {
    let api = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = RestDataSource::<Branch>::new(Arc::new(api))
        .fetch_all()
        .await
        .unwrap_err();

    assert!(matches!(err, DataSourceError::Transport(_)));
}

#[tokio::test]
async fn posts_decision_to_action_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/attendance-requests/att-101/reject"))
        .and(body_json(json!({ "comment": "No evidence" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let source = RestDataSource::<AttendanceRequest>::new(client(&server));
    let payload = DecisionPayload {
        decision: Decision::Rejected,
        comment: Some("No evidence".to_string()),
        revised_value: None,
    };
    source
        .submit_decision(&RecordId::from("att-101"), &payload)
        .await
        .unwrap();
}

#[tokio::test]
async fn conflict_on_submit_rolls_screen_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/attendance-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            attendance_json("att-101", "pending"),
            attendance_json("att-102", "pending")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/attendance-requests/att-102/approve"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Request not found or already processed",
            "code": "CONFLICT"
        })))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::new());
    let source = Arc::new(RestDataSource::<AttendanceRequest>::new(client(&server)));
    let defaults = ScreenDefaults {
        page_size: 10,
        status_filter: Some("pending".into()),
    };
    let mut screen =
        ApprovalScreen::<AttendanceRequest>::new(source, notifier.clone(), &defaults).unwrap();
    screen.refresh().await.unwrap();

    let id = RecordId::from("att-102");
    let err = screen
        .submit_decision(&id, Decision::Approved, None, None)
        .await
        .unwrap_err();

    assert_eq!(err.code(), "DATA_SOURCE_UNAVAILABLE");
    assert_eq!(screen.view().get(&id).unwrap().status, RequestStatus::Pending);
    assert_eq!(screen.view().filtered_count(), 2);
    let last = notifier.last().unwrap();
    assert!(last.0.contains("409"));
}
