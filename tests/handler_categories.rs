mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{caller, plain_author, spawn_app, spawn_app_with, staff_author};
use news_api::api::dto::category::CategoryItem;
use news_api::api::dto::news::NewsItem;
use news_api::domain::policy::CategoryWrites;

// ─── READ ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_category_list_is_public() {
    let app = spawn_app();
    app.db.add_category("Politics");
    app.db.add_category("Sport");

    let response = app.server.get("/api/categories").await;

    response.assert_status_ok();
    let names: Vec<String> = response
        .json::<Vec<CategoryItem>>()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Politics", "Sport"]);
}

#[tokio::test]
async fn test_get_category() {
    let app = spawn_app();
    let category = app.db.add_category("Culture");

    let response = app
        .server
        .get(&format!("/api/categories/{}", category.id))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": category.id, "name": "Culture" })
    );
}

#[tokio::test]
async fn test_get_category_not_found() {
    let app = spawn_app();

    let response = app.server.get("/api/categories/77").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Category matching query does not exist." })
    );
}

// ─── CATEGORY NEWS ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_category_news_filters_by_category() {
    let app = spawn_app();
    let writer = plain_author(&app.db, "writer");
    let politics = app.db.add_category("Politics");
    let sport = app.db.add_category("Sport");
    let a = app.db.add_news(writer.author_id(), politics.id, "Vote");
    app.db.add_news(writer.author_id(), sport.id, "Match");
    let c = app.db.add_news(writer.author_id(), politics.id, "Debate");

    let response = app
        .server
        .get(&format!("/api/categories/{}/news", politics.id))
        .await;

    response.assert_status_ok();
    let items = response.json::<Vec<NewsItem>>();
    let ids: Vec<i64> = items.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    assert!(items.iter().all(|n| n.category == politics.id));
}

#[tokio::test]
async fn test_category_news_unknown_category_is_empty() {
    let app = spawn_app();

    let response = app.server.get("/api/categories/999/news").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_category_news_overflowing_id_is_not_found() {
    let app = spawn_app();

    let response = app
        .server
        .get("/api/categories/99999999999999999999999/news")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "error": "Not found." }));
}

#[tokio::test]
async fn test_get_category_non_numeric_id() {
    let app = spawn_app();

    let response = app.server.get("/api/categories/sport").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "error": "Not found." }));
}

// ─── WRITE (staff only by default) ───────────────────────────────────────────

#[tokio::test]
async fn test_create_category_as_staff() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");

    let response = app
        .server
        .post("/api/categories")
        .add_header("Authorization", editor.bearer())
        .json(&json!({ "name": "Economy" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let item = response.json::<CategoryItem>();
    assert_eq!(item.name, "Economy");
    assert_eq!(app.db.categories().len(), 1);
}

#[tokio::test]
async fn test_create_category_anonymous_unauthorized() {
    let app = spawn_app();

    let response = app
        .server
        .post("/api/categories")
        .json(&json!({ "name": "Economy" }))
        .await;

    response.assert_status_unauthorized();
    assert!(app.db.categories().is_empty());
}

#[tokio::test]
async fn test_create_category_non_staff_forbidden() {
    let app = spawn_app();
    let writer = plain_author(&app.db, "writer");

    let response = app
        .server
        .post("/api/categories")
        .add_header("Authorization", writer.bearer())
        .json(&json!({ "name": "Economy" }))
        .await;

    response.assert_status_forbidden();
}

#[tokio::test]
async fn test_create_category_authenticated_mode_allows_any_user() {
    let app = spawn_app_with(CategoryWrites::Authenticated);
    let reader = caller(&app.db, "reader", false, false);

    let response = app
        .server
        .post("/api/categories")
        .add_header("Authorization", reader.bearer())
        .json(&json!({ "name": "Economy" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_category_authenticated_mode_still_rejects_anonymous() {
    let app = spawn_app_with(CategoryWrites::Authenticated);

    let response = app
        .server
        .post("/api/categories")
        .json(&json!({ "name": "Economy" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_create_category_blank_name() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");

    let response = app
        .server
        .post("/api/categories")
        .add_header("Authorization", editor.bearer())
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].get("name").is_some());
}

#[tokio::test]
async fn test_create_category_whitespace_name() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");

    let response = app
        .server
        .post("/api/categories")
        .add_header("Authorization", editor.bearer())
        .json(&json!({ "name": " \t " }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": { "name": ["This field may not be blank."] } })
    );
    assert!(app.db.categories().is_empty());
}

#[tokio::test]
async fn test_create_category_missing_name() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");

    let response = app
        .server
        .post("/api/categories")
        .add_header("Authorization", editor.bearer())
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": { "name": ["This field is required."] } })
    );
}

#[tokio::test]
async fn test_update_category_as_staff() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");
    let category = app.db.add_category("Tech");

    let response = app
        .server
        .put(&format!("/api/categories/{}", category.id))
        .add_header("Authorization", editor.bearer())
        .json(&json!({ "name": "Technology" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": category.id, "name": "Technology" })
    );
}

#[tokio::test]
async fn test_update_category_non_staff_forbidden() {
    let app = spawn_app();
    let writer = plain_author(&app.db, "writer");
    let category = app.db.add_category("Tech");

    let response = app
        .server
        .put(&format!("/api/categories/{}", category.id))
        .add_header("Authorization", writer.bearer())
        .json(&json!({ "name": "Gadgets" }))
        .await;

    response.assert_status_forbidden();
    assert_eq!(app.db.categories()[0].name, "Tech");
}

#[tokio::test]
async fn test_update_category_not_found() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");

    let response = app
        .server
        .put("/api/categories/404")
        .add_header("Authorization", editor.bearer())
        .json(&json!({ "name": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_category_cascades_to_news() {
    let app = spawn_app();
    let editor = staff_author(&app.db, "editor");
    let doomed = app.db.add_category("Doomed");
    let kept = app.db.add_category("Kept");
    app.db.add_news(editor.author_id(), doomed.id, "Gone");
    let survivor = app.db.add_news(editor.author_id(), kept.id, "Stays");

    let response = app
        .server
        .delete(&format!("/api/categories/{}", doomed.id))
        .add_header("Authorization", editor.bearer())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "deleted": true }));

    let remaining = app.db.news();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    app.server.get("/api/news").await.assert_status_ok();
}

#[tokio::test]
async fn test_delete_category_anonymous_unauthorized() {
    let app = spawn_app();
    let category = app.db.add_category("Tech");

    let response = app
        .server
        .delete(&format!("/api/categories/{}", category.id))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(app.db.categories().len(), 1);
}
