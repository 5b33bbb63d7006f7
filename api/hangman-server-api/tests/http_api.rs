use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use hangman_core::WordBank;
use hangman_server_api::{decode_game_key, encode_game_key, router};
use hangman_server_app::{
    build_application,
    domain::{GameId, word::RandomWordSource},
    memory::{InMemoryGameRepository, InMemoryScoreRepository, InMemoryUserRepository},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_router(words: &[&str]) -> Router {
    let word_source = Arc::new(RandomWordSource::new(
        WordBank::new(words.iter().copied()).unwrap(),
        Some(7),
    ));
    let app = build_application(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryGameRepository::new()),
        Arc::new(InMemoryScoreRepository::new()),
        word_source,
    );
    router(Arc::new(app))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = router.clone().oneshot(request).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_user(router: &Router, name: &str) -> (StatusCode, Value) {
    send(
        router,
        Method::POST,
        "/hangman/v1/user",
        Some(json!({ "user_name": name, "email": format!("{}@example.com", name) })),
    )
    .await
}

async fn new_game(router: &Router, name: &str) -> String {
    let (status, body) = send(
        router,
        Method::POST,
        "/hangman/v1/game",
        Some(json!({ "user_name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["urlsafe_key"].as_str().unwrap().to_string()
}

async fn guess(router: &Router, key: &str, guess: &str) -> Value {
    let (status, body) = send(
        router,
        Method::PUT,
        &format!("/hangman/v1/game/{}", key),
        Some(json!({ "guess": guess })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_create_user() {
    let router = test_router(&["cat"]);

    let (status, body) = create_user(&router, "alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User alice created!");

    let (status, body) = create_user(&router, "alice").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "A User with that name already exists!");
}

#[tokio::test]
async fn test_new_game_and_get() {
    let router = test_router(&["cat"]);
    create_user(&router, "alice").await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/hangman/v1/game",
        Some(json!({ "user_name": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Good luck playing Hangman!");
    assert_eq!(body["status"], "_ _ _");
    assert_eq!(body["misses_remaining"], 6);
    assert_eq!(body["game_over"], false);
    assert_eq!(body["user_name"], "alice");
    assert_eq!(body["history"], json!([]));

    let key = body["urlsafe_key"].as_str().unwrap();
    let (status, body) = send(&router, Method::GET, &format!("/hangman/v1/game/{}", key), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Time to make a move!");
    assert_eq!(body["urlsafe_key"], key);

    let (status, body) = send(
        &router,
        Method::POST,
        "/hangman/v1/game",
        Some(json!({ "user_name": "nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "A User with that name does not exist!");
}

#[tokio::test]
async fn test_game_keys() {
    let router = test_router(&["cat"]);

    let (status, body) = send(&router, Method::GET, "/hangman/v1/game/not-a-key", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid game key");

    let missing = encode_game_key(GameId(999));
    let (status, body) = send(&router, Method::GET, &format!("/hangman/v1/game/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Game not found!");

    assert_eq!(decode_game_key(&missing), Some(GameId(999)));
}

#[tokio::test]
async fn test_winning_game() {
    let router = test_router(&["cat"]);
    create_user(&router, "alice").await;
    let key = new_game(&router, "alice").await;

    let body = guess(&router, &key, "c").await;
    assert_eq!(body["message"], "good guess");
    assert_eq!(body["status"], "c _ _");
    assert_eq!(body["good_guesses"], json!(["c"]));

    let body = guess(&router, &key, "C").await;
    assert_eq!(body["message"], "You've already guessed that letter.");
    let body = guess(&router, &key, "ca").await;
    assert_eq!(body["message"], "You can only guess a single letter or the whole word.");
    let body = guess(&router, &key, "1").await;
    assert_eq!(body["message"], "You can only guess letters.");

    guess(&router, &key, "a").await;
    let body = guess(&router, &key, "t").await;
    assert_eq!(body["message"], "You win! The word was cat.");
    assert_eq!(body["game_over"], true);
    assert_eq!(body["status"], "c a t");

    let body = guess(&router, &key, "x").await;
    assert_eq!(body["message"], "Game already over!");
    assert_eq!(body["bad_guesses"], json!([]));

    let (status, body) = send(
        &router,
        Method::GET,
        &format!("/hangman/v1/game/history/{}", key),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["urlsafe_key"], key.as_str());
    assert_eq!(
        body["history"],
        json!([
            "guess: c, result: hit",
            "guess: a, result: hit",
            "guess: t, result: win"
        ])
    );

    let (_, body) = send(&router, Method::GET, "/hangman/v1/scores", None).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["user_name"], "alice");
    assert_eq!(items[0]["won"], true);
    assert_eq!(items[0]["misses"], 0);
    assert_eq!(items[0]["date"].as_str().unwrap().len(), "YYYY-MM-DD".len());

    let (_, body) = send(&router, Method::GET, "/hangman/v1/rankings", None).await;
    assert_eq!(
        body["items"],
        json!([{ "user_name": "alice", "percent_won": 100, "played": 1 }])
    );
}

#[tokio::test]
async fn test_losing_game() {
    let router = test_router(&["dog"]);
    create_user(&router, "bob").await;
    let key = new_game(&router, "bob").await;

    for letter in ["x", "y", "z", "q", "w"] {
        let body = guess(&router, &key, letter).await;
        assert_eq!(body["message"], "bad guess");
    }
    let body = guess(&router, &key, "v").await;
    assert_eq!(body["message"], "You lost! The word was dog.");
    assert_eq!(body["misses_remaining"], 0);
    assert_eq!(body["game_over"], true);

    let (status, body) = send(
        &router,
        Method::DELETE,
        &format!("/hangman/v1/game/cancel/{}", key),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Game already over!");

    let (_, body) = send(&router, Method::GET, "/hangman/v1/scores/user/bob", None).await;
    assert_eq!(body["items"][0]["won"], false);
    assert_eq!(body["items"][0]["misses"], 6);

    let (_, body) = send(&router, Method::GET, "/hangman/v1/rankings", None).await;
    assert_eq!(body["items"][0]["percent_won"], 0);
}

#[tokio::test]
async fn test_user_games_and_cancel() {
    let router = test_router(&["cat"]);
    create_user(&router, "alice").await;

    let (status, body) = send(&router, Method::GET, "/hangman/v1/games/user/alice", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No games yet for User!");

    let (status, body) = send(&router, Method::GET, "/hangman/v1/games/user/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "A User with that name does not exist!");

    let first = new_game(&router, "alice").await;
    let second = new_game(&router, "alice").await;
    guess(&router, &second, "cat").await;

    let (status, body) = send(&router, Method::GET, "/hangman/v1/games/user/alice", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["urlsafe_key"], first.as_str());
    assert_eq!(items[0]["message"], "");

    let (status, body) = send(
        &router,
        Method::DELETE,
        &format!("/hangman/v1/game/cancel/{}", first),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Success. Game cancelled.");

    let (status, _) = send(&router, Method::GET, &format!("/hangman/v1/game/{}", first), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&router, Method::GET, "/hangman/v1/games/user/alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_high_scores() {
    let router = test_router(&["cat"]);
    create_user(&router, "alice").await;

    for misses in [3, 0, 5, 1, 2, 4] {
        let key = new_game(&router, "alice").await;
        for letter in ["b", "d", "e", "f", "g"].iter().take(misses) {
            guess(&router, &key, letter).await;
        }
        guess(&router, &key, "cat").await;
    }

    let (status, body) = send(&router, Method::GET, "/hangman/v1/scores/highest", None).await;
    assert_eq!(status, StatusCode::OK);
    let misses: Vec<u64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["misses"].as_u64().unwrap())
        .collect();
    assert_eq!(misses, vec![0, 1, 2, 3, 4]);

    let (_, body) = send(
        &router,
        Method::GET,
        "/hangman/v1/scores/highest?number_of_results=2",
        None,
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let (_, body) = send(
        &router,
        Method::GET,
        "/hangman/v1/scores/highest?number_of_results=0",
        None,
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 5);

    let (status, _) = send(&router, Method::GET, "/hangman/v1/scores/user/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_requests_get_json_errors() {
    let router = test_router(&["cat"]);
    create_user(&router, "alice").await;
    let key = new_game(&router, "alice").await;

    let (status, body) = send(&router, Method::POST, "/hangman/v1/user", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("user_name"));

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/hangman/v1/game/{}", key),
        Some(json!({ "letter": "c" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("guess"));

    let (status, body) = send(
        &router,
        Method::GET,
        "/hangman/v1/scores/highest?number_of_results=abc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let res = router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/hangman/v1/game")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    // the game was not touched by the rejected move
    let (_, body) = send(&router, Method::GET, &format!("/hangman/v1/game/{}", key), None).await;
    assert_eq!(body["history"], json!([]));
}
