mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

use common::TestApp;

fn report_form(title: &str) -> MultipartForm {
    let photo = Part::bytes(b"fake-jpeg-bytes".to_vec())
        .file_name("lubang.jpg")
        .mime_type("image/jpeg");

    MultipartForm::new()
        .add_part("photo", photo)
        .add_text("title", title)
        .add_text("description", "Lubang besar di tengah jalan")
        .add_text("latitude", "-6.2088")
        .add_text("longitude", "106.8456")
        .add_text("damageType", "Jalan Berlubang")
        .add_text("damageSeverity", "Berat")
        .add_text("trafficImpact", "Macet")
        .add_text("impactedVehicles", r#"["Motor","Mobil"]"#)
}

async fn submit_report(app: &TestApp, token: &str, title: &str) -> axum_test::TestResponse {
    app.server
        .post("/api/reports")
        .authorization_bearer(token)
        .multipart(report_form(title))
        .await
}

async fn list_reports(app: &TestApp, token: &str) -> Vec<Value> {
    let response = app
        .server
        .get("/api/reports")
        .authorization_bearer(token)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["data"].as_array().cloned().unwrap_or_default()
}

#[tokio::test]
async fn create_requires_photo_and_location() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    let form = MultipartForm::new().add_text("title", "Tanpa foto");
    let response = app
        .server
        .post("/api/reports")
        .authorization_bearer(&token)
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Foto dan Lokasi wajib ada!");
}

#[tokio::test]
async fn create_and_list_round_trip() {
    let app = TestApp::spawn().await;
    let token = app
        .login_token("Siti Aminah", "siti@example.com", "rahasia123")
        .await;

    let response = submit_report(&app, &token, "Jalan berlubang").await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Laporan berhasil dikirim!");

    let reports = list_reports(&app, &token).await;
    assert_eq!(reports.len(), 1);

    let report = &reports[0];
    assert_eq!(report["title"], "Jalan berlubang");
    assert_eq!(report["status"], "Pending");
    assert_eq!(report["priority"], "Sedang");
    assert_eq!(report["latitude"], -6.2088);
    assert_eq!(report["pelapor"]["nama"], "Siti Aminah");
    assert_eq!(report["impactedVehicles"], json!(["Motor", "Mobil"]));
    assert!(report["photo"].as_str().unwrap().ends_with(".jpg"));
}

#[tokio::test]
async fn malformed_impacted_vehicles_is_kept_as_single_element() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    // Not a JSON array; the report still goes through and the raw value
    // comes back as a one-element list.
    let photo = Part::bytes(b"fake-jpeg-bytes".to_vec())
        .file_name("lubang.jpg")
        .mime_type("image/jpeg");
    let form = MultipartForm::new()
        .add_part("photo", photo)
        .add_text("latitude", "-6.2088")
        .add_text("impactedVehicles", "Motor, Mobil");

    let response = app
        .server
        .post("/api/reports")
        .authorization_bearer(&token)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::CREATED);

    let reports = list_reports(&app, &token).await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["impactedVehicles"], json!(["Motor, Mobil"]));
}

#[tokio::test]
async fn oversized_photo_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    // One byte over the 5 MiB cap
    let photo = Part::bytes(vec![0u8; 5 * 1024 * 1024 + 1])
        .file_name("lubang.jpg")
        .mime_type("image/jpeg");
    let form = MultipartForm::new()
        .add_part("photo", photo)
        .add_text("latitude", "-6.2088");

    let response = app
        .server
        .post("/api/reports")
        .authorization_bearer(&token)
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Ukuran foto maksimal 5 MB!");
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    submit_report(&app, &token, "Laporan pertama")
        .await
        .assert_status(StatusCode::CREATED);
    submit_report(&app, &token, "Laporan kedua")
        .await
        .assert_status(StatusCode::CREATED);

    let reports = list_reports(&app, &token).await;
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["title"], "Laporan kedua");
    assert_eq!(reports[1]["title"], "Laporan pertama");
}

#[tokio::test]
async fn update_status_changes_both_fields() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    submit_report(&app, &token, "Jalan retak")
        .await
        .assert_status(StatusCode::CREATED);
    let id = list_reports(&app, &token).await[0]["id"].as_i64().unwrap();

    let response = app
        .server
        .patch(&format!("/api/reports/{}/status", id))
        .authorization_bearer(&token)
        .json(&json!({ "status": "Proses", "priority": "Tinggi" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Data berhasil diperbarui!");
    assert_eq!(body["data"]["status"], "Proses");
    assert_eq!(body["data"]["priority"], "Tinggi");
}

#[tokio::test]
async fn update_rejects_unknown_status() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    submit_report(&app, &token, "Jalan retak")
        .await
        .assert_status(StatusCode::CREATED);
    let id = list_reports(&app, &token).await[0]["id"].as_i64().unwrap();

    let response = app
        .server
        .patch(&format!("/api/reports/{}/status", id))
        .authorization_bearer(&token)
        .json(&json!({ "status": "Ditutup" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Status tidak valid!");

    // Nothing changed
    let reports = list_reports(&app, &token).await;
    assert_eq!(reports[0]["status"], "Pending");
}

#[tokio::test]
async fn update_rejects_unknown_priority() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    submit_report(&app, &token, "Jalan retak")
        .await
        .assert_status(StatusCode::CREATED);
    let id = list_reports(&app, &token).await[0]["id"].as_i64().unwrap();

    let response = app
        .server
        .patch(&format!("/api/reports/{}/status", id))
        .authorization_bearer(&token)
        .json(&json!({ "priority": "Ekstrem" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Prioritas tidak valid!");
}

#[tokio::test]
async fn update_missing_report_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    let response = app
        .server
        .patch("/api/reports/9999/status")
        .authorization_bearer(&token)
        .json(&json!({ "status": "Proses" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Laporan tidak ditemukan!");
}

#[tokio::test]
async fn delete_removes_the_report() {
    let app = TestApp::spawn().await;
    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;

    submit_report(&app, &token, "Jalan amblas")
        .await
        .assert_status(StatusCode::CREATED);
    let id = list_reports(&app, &token).await[0]["id"].as_i64().unwrap();

    let response = app
        .server
        .delete(&format!("/api/reports/{}", id))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Laporan berhasil dihapus!");

    assert!(list_reports(&app, &token).await.is_empty());

    // A second delete finds nothing
    let response = app
        .server
        .delete(&format!("/api/reports/{}", id))
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_count_users_and_resolved_reports() {
    let app = TestApp::spawn().await;

    // Public endpoint, no token needed
    let response = app.server.get("/api/stats").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["userCount"], 0);
    assert_eq!(body["resolvedReportsCount"], 0);
    assert_eq!(body["regionCount"], 1);

    let token = app.login_token("Budi", "budi@example.com", "rahasia123").await;
    submit_report(&app, &token, "Jalan berlubang")
        .await
        .assert_status(StatusCode::CREATED);
    let id = list_reports(&app, &token).await[0]["id"].as_i64().unwrap();

    // Only resolved reports count
    let body: Value = app.server.get("/api/stats").await.json();
    assert_eq!(body["userCount"], 1);
    assert_eq!(body["resolvedReportsCount"], 0);

    app.server
        .patch(&format!("/api/reports/{}/status", id))
        .authorization_bearer(&token)
        .json(&json!({ "status": "Selesai" }))
        .await
        .assert_status_ok();

    let body: Value = app.server.get("/api/stats").await.json();
    assert_eq!(body["resolvedReportsCount"], 1);
}

#[tokio::test]
async fn api_root_and_db_check_respond() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/api").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");

    let response = app.server.get("/api/db-check").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Database terhubung!");
}
