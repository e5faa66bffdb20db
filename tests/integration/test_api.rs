use super::helpers::{
    assert_status, empty_request, json_request, read_json, send, try_spawn_app, unique_token,
};
use axum::http::StatusCode;
use content_api::domain::{blog::entity::Blog, news::entity::NewsItem, shared::pagination::PageResult};
use serde_json::{Value, json};

#[tokio::test]
async fn health_reports_database_up() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(&app.app, empty_request("GET", "/v1/health")).await;
    assert_status(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
    assert!(body["pool"]["size"].as_u64().unwrap() >= 1);
    assert_eq!(body["pool"]["max_connections"], 5);
}

#[tokio::test]
async fn blog_lifecycle_over_http() {
    let Some(app) = try_spawn_app().await else { return };
    let title = unique_token("http-blog");

    let res = send(
        &app.app,
        json_request("POST", "/v1/blogs", &json!({ "title": title, "content": "created over http" })),
    )
    .await;
    assert_status(res.status(), StatusCode::CREATED);
    let created: Blog = read_json(res).await;
    assert_eq!(created.title, title);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs WHERE id = $1")
        .bind(created.id)
        .fetch_one(&app.db)
        .await
        .expect("count failed");
    assert_eq!(stored, 1);

    let res = send(
        &app.app,
        json_request(
            "PUT",
            &format!("/v1/blogs/{}", created.id),
            &json!({ "title": format!("{} v2", title), "content": "updated over http" }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);
    let updated: Blog = read_json(res).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    let res = send(&app.app, empty_request("GET", &format!("/v1/blogs/{}", created.id))).await;
    assert_status(res.status(), StatusCode::OK);
    let fetched: Blog = read_json(res).await;
    assert_eq!(fetched.content, "updated over http");

    let res = send(&app.app, empty_request("DELETE", &format!("/v1/blogs/{}", created.id))).await;
    assert_status(res.status(), StatusCode::OK);

    let res = send(&app.app, empty_request("GET", &format!("/v1/blogs/{}", created.id))).await;
    assert_status(res.status(), StatusCode::NOT_FOUND);
    let body: Value = read_json(res).await;
    assert!(body["error"].is_string());

    let res = send(&app.app, empty_request("DELETE", &format!("/v1/blogs/{}", created.id))).await;
    assert_status(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn news_listing_over_http() {
    let Some(app) = try_spawn_app().await else { return };
    let token = unique_token("http-news");
    for i in 0..3 {
        let res = send(
            &app.app,
            json_request(
                "POST",
                "/v1/news",
                &json!({ "title": format!("{} {}", token, i), "content": "listed news content" }),
            ),
        )
        .await;
        assert_status(res.status(), StatusCode::CREATED);
    }

    let res = send(
        &app.app,
        empty_request("GET", &format!("/v1/news?title={}&page=2&size=2", token)),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);
    let page: PageResult<NewsItem> = read_json(res).await;
    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.size, 2);
    assert!(!page.has_more);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, format!("{} 2", token));
}

#[tokio::test]
async fn list_size_is_clamped_and_page_defaults() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(
        &app.app,
        empty_request("GET", &format!("/v1/blogs?title={}&page=0&size=1000", unique_token("none"))),
    )
    .await;
    assert_status(res.status(), StatusCode::OK);
    let page: PageResult<Blog> = read_json(res).await;
    assert_eq!(page.page, 1);
    assert_eq!(page.size, 50);
    assert_eq!(page.total_count, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn non_positive_size_is_bad_request() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(&app.app, empty_request("GET", "/v1/news?size=0")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);

    let res = send(&app.app, empty_request("GET", "/v1/news?size=abc")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unaddressable_page_is_bad_request() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(
        &app.app,
        empty_request("GET", &format!("/v1/blogs?page={}", i64::MAX)),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("out of range"));
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(&app.app, empty_request("GET", "/v1/blogs/not-a-uuid")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);

    let res = send(&app.app, empty_request("DELETE", "/v1/news/1234")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_body_is_bad_request() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(
        &app.app,
        json_request("POST", "/v1/blogs", &json!({ "title": "ab", "content": "long enough content" })),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);

    let res = send(
        &app.app,
        json_request("POST", "/v1/news", &json!({ "title": "fine title", "content": "short" })),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);

    let res = send(&app.app, json_request("POST", "/v1/news", &json!({ "title": "missing content" }))).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn docs_list_both_resources() {
    let Some(app) = try_spawn_app().await else { return };
    let res = send(&app.app, empty_request("GET", "/v1/docs")).await;
    assert_status(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert!(body["paths"]["/v1/blogs"].is_object());
    assert!(body["paths"]["/v1/news/{id}"]["delete"].is_object());
}
