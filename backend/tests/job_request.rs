mod support;

use actix_web::{test, App};
use backend::configure_app;
use serde_json::{json, Value};
use std::sync::Arc;
use support::{test_state, write_job_request_conf, FakeEln, FakeMailer};

fn request_form(title: &str) -> Vec<(&'static str, String)> {
    let data = json!({
        "requester": { "name": "Alice", "email": "alice@example.org" },
        "operator": "Jane Doe",
        "sample": "Si-01"
    });
    vec![
        ("javascript_data", data.to_string()),
        ("schema", json!({ "title": title }).to_string()),
        ("body", "<table></table>".to_string()),
    ]
}

#[actix_web::test]
async fn submission_mails_requester_then_operators() {
    let dir = tempfile::tempdir().unwrap();
    write_job_request_conf(dir.path());
    let mailer = Arc::new(FakeMailer::default());
    let state = test_state(dir.path(), Arc::new(FakeEln::default()), mailer.clone());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, state))).await;

    let req = test::TestRequest::post()
        .uri("/api/submit_job_request")
        .set_form(request_form("SEM request"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "response": 200, "responseText": "Your request has been submitted." })
    );

    let relay = "smtp.example.org".to_string();
    assert_eq!(
        mailer.sent(),
        vec![
            (relay.clone(), vec!["alice@example.org".to_string()]),
            (
                relay,
                vec!["jane@example.org".to_string(), "head@example.org".to_string()]
            ),
        ]
    );
}

#[actix_web::test]
async fn missing_configuration_reports_unavailable_operators() {
    let dir = tempfile::tempdir().unwrap();
    let mailer = Arc::new(FakeMailer::default());
    let state = test_state(dir.path(), Arc::new(FakeEln::default()), mailer.clone());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, state))).await;

    let req = test::TestRequest::post()
        .uri("/api/submit_job_request")
        .set_form(request_form("SEM request"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["response"], 500);
    assert_eq!(
        body["responseText"],
        "List of operators are not available in the server."
    );
    assert!(mailer.sent().is_empty());
}

#[actix_web::test]
async fn unknown_schema_title_reports_unavailable_operators() {
    let dir = tempfile::tempdir().unwrap();
    write_job_request_conf(dir.path());
    let state = test_state(dir.path(), Arc::default(), Arc::default());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, state))).await;

    let req = test::TestRequest::post()
        .uri("/api/submit_job_request")
        .set_form(request_form("XRD request"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["response"], 500);
}

#[actix_web::test]
async fn send_failure_is_reported_in_body() {
    let dir = tempfile::tempdir().unwrap();
    write_job_request_conf(dir.path());
    let state = test_state(
        dir.path(),
        Arc::new(FakeEln::default()),
        Arc::new(FakeMailer::failing()),
    );
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, state))).await;

    let req = test::TestRequest::post()
        .uri("/api/submit_job_request")
        .set_form(request_form("SEM complete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "response": 500, "responseText": "Something went wrong" })
    );
}

#[actix_web::test]
async fn login_checks_admin_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), Arc::default(), Arc::default());
    let app = test::init_service(App::new().configure(|cfg| configure_app(cfg, state))).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "admin", "password": "admin" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["token"].as_str().unwrap().len(), 36);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "admin", "password": "guess" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Invalid username or password" }));
}
