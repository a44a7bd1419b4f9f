
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;
use uuid::Uuid;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

#[actix_rt::test]
async fn empty_store_shows_the_sample_content() {
    let app = TestApp::spawn().await;
    app.mount_rows("projects", json!([])).await;
    app.mount_rows("skills", json!([])).await;

    let res = app.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert!(body.contains("Prediksi Harga Mobil"));
    assert!(body.contains("Unity Card Game"));
    assert!(body.contains("Programming Languages"));
    for anchor in ["id=\"home\"", "id=\"about\"", "id=\"skills\"", "id=\"projects\"", "id=\"contact\""] {
        assert!(body.contains(anchor), "missing section {}", anchor);
    }
}

#[actix_rt::test]
async fn unreachable_store_still_renders_the_page() {
    let app = TestApp::spawn().await;

    let res = app.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Sistem Monitoring Pajak"));
}

#[actix_rt::test]
async fn projects_are_shown_in_order_index_order() {
    let app = TestApp::spawn().await;
    app.mount_rows("projects", json!([
        project_row(Uuid::new_v4(), "Second Project", "web", 2),
        project_row(Uuid::new_v4(), "First Project", "game", 1),
    ]))
    .await;
    app.mount_rows("skills", json!([])).await;

    let body = app.get("/").await.text().await.unwrap();

    let first = body.find("First Project").unwrap();
    let second = body.find("Second Project").unwrap();
    assert!(first < second);
    assert!(!body.contains("Prediksi Harga Mobil"));
    assert!(body.contains(">FI<"));
}

#[actix_rt::test]
async fn filter_query_hides_other_categories() {
    let app = TestApp::spawn().await;
    app.mount_rows("projects", json!([
        project_row(Uuid::new_v4(), "Web Thing", "web", 1),
        project_row(Uuid::new_v4(), "Game Thing", "game", 2),
    ]))
    .await;
    app.mount_rows("skills", json!([])).await;

    let body = app.get("/?filter=game").await.text().await.unwrap();

    assert!(body.contains("data-category=\"web\" hidden"));
    assert!(body.contains("data-category=\"game\">"));
}

#[actix_rt::test]
async fn skills_are_grouped_in_first_seen_order() {
    let app = TestApp::spawn().await;
    app.mount_rows("projects", json!([])).await;
    app.mount_rows("skills", json!([
        skill_row(Uuid::new_v4(), "Rust", "Systems", 70),
        skill_row(Uuid::new_v4(), "Django", "Backend", 90),
        skill_row(Uuid::new_v4(), "Zig", "Systems", 120),
    ]))
    .await;

    let body = app.get("/").await.text().await.unwrap();

    assert!(body.find("<h3>Systems</h3>").unwrap() < body.find("<h3>Backend</h3>").unwrap());
    assert!(body.contains("style=\"width: 100%\""));
    assert!(body.contains("style=\"width: 70%\""));
}

#[actix_rt::test]
async fn contact_submission_inserts_one_row_and_clears_the_form() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_messages"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!([{
            "name": "Ana",
            "email": "ana@example.com",
            "message": "Halo, mari bekerja sama!"
        }])))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.store)
        .await;

    let res = app
        .post_form("/contact", &[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("message", "Halo, mari bekerja sama!"),
        ])
        .await;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res).as_deref(), Some("/#contact"));
    assert_eq!(
        flash(&res).unwrap().message,
        "Pesan berhasil dikirim! Terima kasih sudah menghubungi saya."
    );
}

#[actix_rt::test]
async fn failed_contact_submission_keeps_what_was_typed() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_messages"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })))
        .expect(1)
        .mount(&app.store)
        .await;

    let res = app
        .post_form("/contact", &[
            ("name", "Budi"),
            ("email", "budi@example.com"),
            ("message", "Pesan penting"),
        ])
        .await;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body = res.text().await.unwrap();
    assert!(body.contains("Gagal mengirim pesan. Silakan coba lagi."));
    assert!(body.contains("value=\"Budi\""));
    assert!(body.contains("value=\"budi@example.com\""));
    assert!(body.contains(">Pesan penting</textarea>"));
}

#[actix_rt::test]
async fn malformed_email_never_reaches_the_store() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_messages"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.store)
        .await;

    let res = app
        .post_form("/contact", &[("name", "Citra"), ("email", "not-an-email"), ("message", "Hai")])
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.text().await.unwrap();
    assert!(body.contains("value=\"Citra\""));
    assert!(body.contains("Gagal mengirim pesan"));
}

#[actix_rt::test]
async fn health_reports_store_reachability() {
    let app = TestApp::spawn().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.store)
        .await;

    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);

    let health: Value = res.json().await.unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["content_store"], "OK");
}

#[actix_rt::test]
async fn unknown_files_and_traversal_are_not_found() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/missing.png").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/..%2FCargo.toml").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/.env").await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn robots_keep_crawlers_out_of_admin() {
    let app = TestApp::spawn().await;

    let body = app.get("/robots.txt").await.text().await.unwrap();
    assert!(body.contains("Disallow: /admin"));
}
