//! API integration tests.
//!
//! Require a running server with a clean database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn create_author(client: &Client, first: &str, last: &str) -> Value {
    let response = client
        .post(format!("{}/admin/authors", BASE_URL))
        .json(&json!({ "first_name": first, "last_name": last }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse author")
}

async fn create_book(client: &Client, title: &str, author_id: Option<i64>) -> Value {
    let response = client
        .post(format!("{}/admin/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author_id": author_id,
            "summary": "A test book",
            "isbn": "9780441172719",
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse book")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_admin_index_lists_registered_models() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admin/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slugs: Vec<&str> = body
        .as_array()
        .expect("Index should be an array")
        .iter()
        .map(|m| m["slug"].as_str().unwrap())
        .collect();

    for slug in ["books", "authors", "genres", "bookinstances", "languages"] {
        assert!(slugs.contains(&slug), "Missing registered model {}", slug);
    }
}

#[tokio::test]
#[ignore]
async fn test_genre_crud() {
    let client = Client::new();

    let created: Value = client
        .post(format!("{}/admin/genres", BASE_URL))
        .json(&json!({ "name": "Science Fiction" }))
        .send()
        .await
        .expect("Failed to create genre")
        .json()
        .await
        .expect("Failed to parse genre");
    let id = created["id"].as_i64().expect("Genre id");

    let fetched: Value = client
        .get(format!("{}/admin/genres/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to get genre")
        .json()
        .await
        .expect("Failed to parse genre");
    assert_eq!(fetched["name"], "Science Fiction");

    let response = client
        .delete(format!("{}/admin/genres/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to delete genre");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/admin/genres/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_genre_name_too_long_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/admin/genres", BASE_URL))
        .json(&json!({ "name": "x".repeat(201) }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_author_label_and_ordering() {
    let client = Client::new();

    create_author(&client, "Frank", "Herbert").await;
    create_author(&client, "Ursula", "Arnason").await;
    create_author(&client, "Eleanor", "Arnason").await;

    let body: Value = client
        .get(format!("{}/admin/authors?per_page=100", BASE_URL))
        .send()
        .await
        .expect("Failed to list authors")
        .json()
        .await
        .expect("Failed to parse list");

    let labels: Vec<String> = body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|row| row["label"].as_str().unwrap().to_string())
        .collect();

    assert!(labels.contains(&"Herbert, Frank".to_string()));

    // Last name, then first name
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);

    let eleanor = labels
        .iter()
        .position(|l| l == "Arnason, Eleanor")
        .expect("Arnason, Eleanor listed");
    let ursula = labels
        .iter()
        .position(|l| l == "Arnason, Ursula")
        .expect("Arnason, Ursula listed");
    assert!(eleanor < ursula);
}

#[tokio::test]
#[ignore]
async fn test_book_rows_carry_canonical_url() {
    let client = Client::new();

    let book = create_book(&client, "Dune", None).await;
    let id = book["id"].as_i64().unwrap();

    let body: Value = client
        .get(format!("{}/admin/books?per_page=100", BASE_URL))
        .send()
        .await
        .expect("Failed to list books")
        .json()
        .await
        .expect("Failed to parse list");

    let row = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["id"] == id.to_string())
        .expect("Created book in listing");

    assert_eq!(row["label"], "Dune");
    assert_eq!(row["url"], format!("/catalog/books/{}", id));
}

#[tokio::test]
#[ignore]
async fn test_isbn_must_be_13_characters() {
    let client = Client::new();

    let response = client
        .post(format!("{}/admin/books", BASE_URL))
        .json(&json!({
            "title": "Bad ISBN",
            "summary": "",
            "isbn": "12345",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_instance_defaults_to_maintenance_and_label() {
    let client = Client::new();

    let book = create_book(&client, "Dune", None).await;
    let book_id = book["id"].as_i64().unwrap();

    let instance: Value = client
        .post(format!("{}/admin/bookinstances", BASE_URL))
        .json(&json!({ "book_id": book_id, "imprint": "Ace Books, 1990" }))
        .send()
        .await
        .expect("Failed to create instance")
        .json()
        .await
        .expect("Failed to parse instance");

    assert_eq!(instance["status"], "m");
    let id = instance["id"].as_str().expect("UUID id");

    let fetched: Value = client
        .get(format!("{}/admin/bookinstances/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to get instance")
        .json()
        .await
        .expect("Failed to parse instance");
    assert_eq!(fetched["book_title"], "Dune");

    let body: Value = client
        .get(format!("{}/admin/bookinstances?per_page=100", BASE_URL))
        .send()
        .await
        .expect("Failed to list instances")
        .json()
        .await
        .expect("Failed to parse list");

    let row = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["id"] == id)
        .expect("Created copy in listing");
    assert_eq!(row["label"], format!("{} (Dune)", id));
}

#[tokio::test]
#[ignore]
async fn test_deleting_author_keeps_books() {
    let client = Client::new();

    let author = create_author(&client, "Iain", "Banks").await;
    let author_id = author["id"].as_i64().unwrap();
    let book = create_book(&client, "Consider Phlebas", Some(author_id)).await;
    let book_id = book["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/admin/authors/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to delete author");
    assert_eq!(response.status(), 204);

    let survivor: Value = client
        .get(format!("{}/admin/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to get book")
        .json()
        .await
        .expect("Failed to parse book");
    assert_eq!(survivor["title"], "Consider Phlebas");
    assert!(survivor["author_id"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_deleting_book_keeps_instances() {
    let client = Client::new();

    let book = create_book(&client, "Use of Weapons", None).await;
    let book_id = book["id"].as_i64().unwrap();

    let instance: Value = client
        .post(format!("{}/admin/bookinstances", BASE_URL))
        .json(&json!({ "book_id": book_id, "imprint": "Orbit, 1990" }))
        .send()
        .await
        .expect("Failed to create instance")
        .json()
        .await
        .expect("Failed to parse instance");
    let instance_id = instance["id"].as_str().unwrap().to_string();

    let response = client
        .delete(format!("{}/admin/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to delete book");
    assert_eq!(response.status(), 204);

    let survivor: Value = client
        .get(format!("{}/admin/bookinstances/{}", BASE_URL, instance_id))
        .send()
        .await
        .expect("Failed to get instance")
        .json()
        .await
        .expect("Failed to parse instance");
    assert!(survivor["book_id"].is_null());
    assert!(survivor["book_title"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_mark_returned_requires_permission() {
    let client = Client::new();

    let instance: Value = client
        .post(format!("{}/admin/bookinstances", BASE_URL))
        .json(&json!({
            "imprint": "Gollancz, 2001",
            "due_back": "2026-09-15",
            "status": "o",
        }))
        .send()
        .await
        .expect("Failed to create instance")
        .json()
        .await
        .expect("Failed to parse instance");
    let id = instance["id"].as_str().unwrap();

    // Without the named permission
    let response = client
        .post(format!("{}/admin/bookinstances/{}/mark-returned", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    // With it
    let returned: Value = client
        .post(format!("{}/admin/bookinstances/{}/mark-returned", BASE_URL, id))
        .header("X-Permissions", "catalog.can_mark_returned")
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse instance");

    assert_eq!(returned["status"], "a");
    assert!(returned["due_back"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_instances_listed_by_due_date() {
    let client = Client::new();

    for due in ["2026-12-01", "2026-10-01", "2026-11-01"] {
        client
            .post(format!("{}/admin/bookinstances", BASE_URL))
            .json(&json!({ "imprint": "Test imprint", "due_back": due, "status": "o" }))
            .send()
            .await
            .expect("Failed to create instance");
    }

    let body: Value = client
        .get(format!("{}/admin/bookinstances?per_page=100", BASE_URL))
        .send()
        .await
        .expect("Failed to list instances")
        .json()
        .await
        .expect("Failed to parse list");

    let ids: Vec<String> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect();

    let mut due_dates = Vec::new();
    for id in &ids {
        let copy: Value = client
            .get(format!("{}/admin/bookinstances/{}", BASE_URL, id))
            .send()
            .await
            .expect("Failed to get instance")
            .json()
            .await
            .expect("Failed to parse instance");
        if let Some(due) = copy["due_back"].as_str() {
            due_dates.push(due.to_string());
        }
    }

    let mut sorted = due_dates.clone();
    sorted.sort();
    assert_eq!(due_dates, sorted);
}
