mod common;

use common::{assert_error, spawn_app};
use serde_json::json;

#[tokio::test]
async fn categories_are_listed_alphabetically() {
    let app = spawn_app().await;
    for kind in ["Science", "Art", "Geography", "History"] {
        app.add_category(kind).await;
    }

    let res = app.get("/categories").await;
    assert_eq!(res.status, 200);
    assert_eq!(
        res.body,
        json!({
            "success": true,
            "categories": ["Art", "Geography", "History", "Science"]
        })
    );
}

#[tokio::test]
async fn no_categories_is_still_success() {
    let app = spawn_app().await;

    let res = app.get("/categories").await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["categories"], json!([]));
}

#[tokio::test]
async fn category_questions_then_delete_last_one() {
    let app = spawn_app().await;
    let science = app.add_category("Science").await;
    let question = app.add_question("X", "Y", science).await;

    let res = app.get(&format!("/categories/{science}/questions")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["success"], true);
    assert_eq!(res.body["current_category"], "Science");
    assert_eq!(res.body["total_questions"], 1);
    assert_eq!(res.body["categories"], json!(["Science"]));
    assert_eq!(res.body["questions"][0]["id"], question);

    let res = app.delete(&format!("/questions/{question}")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["deleted"], question);

    let res = app.get(&format!("/categories/{science}/questions")).await;
    assert_error(&res, 404, "Resource not found");
}

#[tokio::test]
async fn category_questions_only_include_that_category() {
    let app = spawn_app().await;
    let science = app.add_category("Science").await;
    let art = app.add_category("Art").await;
    app.add_question("Speed of light?", "c", science).await;
    app.add_question("Boiling point of water?", "100C", science).await;
    app.add_question("Who painted Guernica?", "Picasso", art).await;

    let res = app.get(&format!("/categories/{science}/questions")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["total_questions"], 2);
    let questions = res.body["questions"].as_array().unwrap();
    assert_eq!(questions[0]["question"], "Boiling point of water?");
    assert!(questions.iter().all(|q| q["category"] == science));
}

#[tokio::test]
async fn category_page_past_the_end_is_empty_success() {
    let app = spawn_app().await;
    let science = app.add_category("Science").await;
    app.add_question("Speed of light?", "c", science).await;

    let res = app
        .get(&format!("/categories/{science}/questions?page=2"))
        .await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body["questions"], json!([]));
    assert_eq!(res.body["total_questions"], 1);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = spawn_app().await;
    let science = app.add_category("Science").await;
    // Dangling reference: category 42 was never created
    app.add_question("Orphan?", "Yes", 42).await;
    app.add_question("Speed of light?", "c", science).await;

    assert_error(&app.get("/categories/42/questions").await, 404, "Resource not found");
    assert_error(&app.get("/categories/abc/questions").await, 404, "Resource not found");
}
