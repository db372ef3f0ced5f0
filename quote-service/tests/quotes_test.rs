mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::{json, Value};

async fn post_quote(client: &Client, address: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{}/quotes", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

async fn list_quotes(client: &Client, address: &str) -> Vec<Value> {
    client
        .get(format!("{}/quotes", address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON")
}

async fn list_by_category(client: &Client, address: &str, category: &str) -> Vec<Value> {
    client
        .get(format!("{}/quotes/category/{}", address, category))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON")
}

#[tokio::test]
async fn created_quote_appears_in_full_list() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(
        &client,
        &app.address,
        json!({
            "text": "Push yourself, because no one else is going to do it for you.",
            "author": "Unknown",
            "category": "motivation"
        }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.expect("Failed to parse JSON");
    assert!(!created["identity"].as_str().unwrap().is_empty());

    let quotes = list_quotes(&client, &app.address).await;
    assert_eq!(quotes.len(), 1);
    assert_eq!(
        quotes[0]["text"],
        "Push yourself, because no one else is going to do it for you."
    );
    assert_eq!(quotes[0]["category"], "motivation");
    assert_eq!(quotes[0]["identity"], created["identity"]);

    app.cleanup().await;
}

#[tokio::test]
async fn missing_author_defaults_to_unknown() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(
        &client,
        &app.address,
        json!({
            "text": "Success doesn't come to you, you go to it.",
            "category": "success"
        }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(created["author"], "Unknown");

    app.cleanup().await;
}

#[tokio::test]
async fn category_filter_is_case_insensitive_and_exact() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(
        &client,
        &app.address,
        json!({
            "text": "The best way to get started is to quit talking and begin doing.",
            "author": "Walt Disney",
            "category": "Motivation"
        }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);

    for variant in ["motivation", "MOTIVATION", "Motivation"] {
        let quotes = list_by_category(&client, &app.address, variant).await;
        assert_eq!(quotes.len(), 1, "expected a match for {:?}", variant);
        assert_eq!(quotes[0]["category"], "Motivation");
    }

    // Substring of the category must not match
    let quotes = list_by_category(&client, &app.address, "motiv").await;
    assert!(quotes.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn category_with_regex_metacharacters_matches_literally() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(
        &client,
        &app.address,
        json!({
            "text": "Simplicity is the soul of efficiency.",
            "author": "Austin Freeman",
            "category": "c++"
        }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201);

    let quotes = list_by_category(&client, &app.address, "c++").await;
    assert_eq!(quotes.len(), 1);

    // "c.." would match "c++" if the category were compiled as a pattern
    let quotes = list_by_category(&client, &app.address, "c..").await;
    assert!(quotes.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn unknown_category_returns_empty_list() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let quotes = list_by_category(&client, &app.address, "nonexistent").await;
    assert!(quotes.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn create_without_text_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(&client, &app.address, json!({ "category": "wisdom" })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("text"));

    // Nothing was persisted
    let quotes = list_quotes(&client, &app.address).await;
    assert!(quotes.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn create_without_category_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(
        &client,
        &app.address,
        json!({ "text": "A quote without a home." }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 400);

    let quotes = list_quotes(&client, &app.address).await;
    assert!(quotes.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn create_with_empty_text_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = post_quote(
        &client,
        &app.address,
        json!({ "text": "", "category": "wisdom" }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 400);

    app.cleanup().await;
}

#[tokio::test]
async fn concurrent_creates_both_persist() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let first = post_quote(
        &client,
        &app.address,
        json!({
            "text": "If at first you don't succeed, try, try again.",
            "author": "William Edward Hickson",
            "category": "success"
        }),
    );
    let second = post_quote(
        &client,
        &app.address,
        json!({
            "text": "Don't let yesterday take up too much of today.",
            "author": "Will Rogers",
            "category": "life"
        }),
    );

    let (first, second) = tokio::join!(first, second);
    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(second.status().as_u16(), 201);

    let quotes = list_quotes(&client, &app.address).await;
    assert_eq!(quotes.len(), 2);

    app.cleanup().await;
}
