use crate::helpers::spawn_app;

#[actix_rt::test]
pub async fn test_health_check() {
    let app = spawn_app().await;

    let response = app.get("/health_check").await;

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[actix_rt::test]
pub async fn test_landing_page_is_static_html() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert!(response.status().is_success());
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("<title>SOLCAT - Solana Ecosystem Guardian</title>"));
    assert!(body.contains("CatEye Browser Extension"));
    assert!(body.contains("CatPaw Analytics"));
    assert!(body.contains("CatCouncil DAO"));
}
