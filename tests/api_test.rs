//! Integration tests for API endpoints.
//!
//! Every test builds its own router over a fresh, seeded in-memory database.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, get, request};

// =============================================================================
// Root and Infrastructure Endpoints
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let app = app().await;

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Welcome to the Superheroes API"));
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/hero_powers"]["post"].is_object());
}

// =============================================================================
// Heroes
// =============================================================================

#[tokio::test]
async fn test_list_heroes_returns_summaries_in_id_order() {
    let app = app().await;

    let (status, body) = get(&app, "/heroes").await;

    assert_eq!(status, StatusCode::OK);
    let heroes = body.as_array().unwrap();
    assert_eq!(heroes.len(), 10);
    assert_eq!(
        heroes[0],
        json!({ "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" })
    );

    let ids: Vec<i64> = heroes.iter().map(|h| h["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_get_hero_nests_linked_powers() {
    let app = app().await;

    let (status, body) = get(&app, "/heroes/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Kamala Khan",
            "super_name": "Ms. Marvel",
            "hero_powers": [{
                "id": 1,
                "strength": "Strong",
                "hero_id": 1,
                "power_id": 2,
                "power": {
                    "id": 2,
                    "name": "flight",
                    "description": "gives the wielder the ability to fly through the skies at supersonic speed"
                }
            }]
        })
    );
}

#[tokio::test]
async fn test_get_hero_lists_links_in_insertion_order() {
    let app = app().await;

    let (status, body) = get(&app, "/heroes/6").await;

    assert_eq!(status, StatusCode::OK);
    let links = body["hero_powers"].as_array().unwrap();
    let summary: Vec<(i64, &str)> = links
        .iter()
        .map(|l| (l["id"].as_i64().unwrap(), l["strength"].as_str().unwrap()))
        .collect();
    assert_eq!(summary, vec![(3, "Strong"), (4, "Average")]);
}

#[tokio::test]
async fn test_get_hero_without_powers_has_empty_list() {
    let app = app().await;

    let (status, body) = get(&app, "/heroes/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hero_powers"], json!([]));
}

#[tokio::test]
async fn test_get_missing_hero_returns_404() {
    let app = app().await;

    let (status, body) = get(&app, "/heroes/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Hero not found" }));
}

// =============================================================================
// Powers
// =============================================================================

#[tokio::test]
async fn test_list_powers() {
    let app = app().await;

    let (status, body) = get(&app, "/powers").await;

    assert_eq!(status, StatusCode::OK);
    let powers = body.as_array().unwrap();
    assert_eq!(powers.len(), 4);
    assert_eq!(
        powers[0],
        json!({
            "id": 1,
            "name": "super strength",
            "description": "gives the wielder super-human strengths"
        })
    );
}

#[tokio::test]
async fn test_get_power() {
    let app = app().await;

    let (status, body) = get(&app, "/powers/4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "elasticity");
}

#[tokio::test]
async fn test_get_missing_power_returns_404() {
    let app = app().await;

    let (status, body) = get(&app, "/powers/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn test_patch_power_updates_description() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(json!({ "description": "Super strength and durability" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "super strength",
            "description": "Super strength and durability"
        })
    );

    let (_, stored) = get(&app, "/powers/1").await;
    assert_eq!(stored["description"], "Super strength and durability");
}

#[tokio::test]
async fn test_patch_power_stores_trimmed_description() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/powers/2",
        Some(json!({ "description": "   Flies faster than a jet plane   " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "Flies faster than a jet plane");
}

#[tokio::test]
async fn test_patch_power_rejects_short_description() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(json!({ "description": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": ["Description must be at least 20 characters."] })
    );

    let (_, stored) = get(&app, "/powers/1").await;
    assert_eq!(stored["description"], "gives the wielder super-human strengths");
}

#[tokio::test]
async fn test_patch_power_counts_length_after_trimming() {
    let app = app().await;

    // 16 characters once the padding is removed
    let (status, _) = request(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(json!({ "description": "      Short but padded      " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_power_requires_description() {
    let app = app().await;

    let (status, body) = request(&app, Method::PATCH, "/powers/1", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "errors": ["A description is required."] }));
}

#[tokio::test]
async fn test_patch_missing_power_returns_404_before_validation() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/powers/999",
        Some(json!({ "description": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn test_patch_missing_power_without_description_returns_404() {
    let app = app().await;

    let (status, body) = request(&app, Method::PATCH, "/powers/999", Some(json!({}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn test_patch_missing_power_with_mistyped_description_returns_404() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/powers/999",
        Some(json!({ "description": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn test_patch_existing_power_with_mistyped_description_returns_400() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(json!({ "description": 5 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));

    let (_, stored) = get(&app, "/powers/1").await;
    assert_eq!(stored["description"], "gives the wielder super-human strengths");
}

// =============================================================================
// Hero Powers
// =============================================================================

#[tokio::test]
async fn test_create_hero_power_returns_nested_hero_and_power() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/hero_powers",
        Some(json!({ "strength": "Strong", "hero_id": 1, "power_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 6,
            "strength": "Strong",
            "hero_id": 1,
            "power_id": 1,
            "power": {
                "id": 1,
                "name": "super strength",
                "description": "gives the wielder super-human strengths"
            },
            "hero": { "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" }
        })
    );

    let (_, hero) = get(&app, "/heroes/1").await;
    let power_ids: Vec<i64> = hero["hero_powers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["power_id"].as_i64().unwrap())
        .collect();
    assert_eq!(power_ids, vec![2, 1]);
}

#[tokio::test]
async fn test_create_hero_power_rejects_unknown_strength() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/hero_powers",
        Some(json!({ "strength": "strong", "hero_id": 2, "power_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "errors": ["Strength must be one of: Strong, Weak, Average"] })
    );

    let (_, hero) = get(&app, "/heroes/2").await;
    assert_eq!(hero["hero_powers"], json!([]));
}

#[tokio::test]
async fn test_create_hero_power_reports_every_missing_field() {
    let app = app().await;

    let (status, body) = request(&app, Method::POST, "/hero_powers", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "errors": [
                "Hero ID must be provided.",
                "Power ID must be provided.",
                "Strength must be provided."
            ]
        })
    );
}

#[tokio::test]
async fn test_create_hero_power_with_missing_hero() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/hero_powers",
        Some(json!({ "strength": "Weak", "hero_id": 999, "power_id": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "errors": ["Hero not found."] }));
}

#[tokio::test]
async fn test_create_hero_power_with_missing_power() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/hero_powers",
        Some(json!({ "strength": "Weak", "hero_id": 2, "power_id": 999 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "errors": ["Power not found."] }));

    let (_, hero) = get(&app, "/heroes/2").await;
    assert_eq!(hero["hero_powers"], json!([]));
}

#[tokio::test]
async fn test_create_hero_power_rejects_malformed_json() {
    let app = app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/hero_powers",
        Some(json!({ "strength": "Weak", "hero_id": "one", "power_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(1));
}
