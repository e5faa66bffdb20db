use axum::Json;
use serde_json::{Value, json};

fn resource_paths(resource: &str, label: &str) -> (String, Value, String, Value) {
    (
        format!("/v1/{}", resource),
        json!({
            "get": {
                "summary": format!("List {} (query: title, page, size)", resource),
                "parameters": [
                    { "name": "title", "in": "query", "required": false, "schema": { "type": "string" } },
                    { "name": "page", "in": "query", "required": false, "schema": { "type": "integer", "default": 1 } },
                    { "name": "size", "in": "query", "required": false, "schema": { "type": "integer", "default": 10 } }
                ]
            },
            "post": { "summary": format!("Create {}", label) }
        }),
        format!("/v1/{}/{{id}}", resource),
        json!({
            "get": { "summary": format!("Get {} by id", label) },
            "put": { "summary": format!("Update {} title and content", label) },
            "delete": { "summary": format!("Delete {}", label) }
        }),
    )
}

pub async fn api_docs() -> Json<Value> {
    let mut paths = serde_json::Map::new();
    for (resource, label) in [("blogs", "blog"), ("news", "news item")] {
        let (list_path, list_ops, item_path, item_ops) = resource_paths(resource, label);
        paths.insert(list_path, list_ops);
        paths.insert(item_path, item_ops);
    }
    paths.insert(
        "/v1/health".to_string(),
        json!({ "get": { "summary": "Health check" } }),
    );
    paths.insert(
        "/v1/docs".to_string(),
        json!({ "get": { "summary": "OpenAPI spec" } }),
    );

    Json(json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Blog and News API",
            "description": "Blog and news REST API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": paths
    }))
}
