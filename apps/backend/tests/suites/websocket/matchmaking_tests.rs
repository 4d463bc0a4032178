// Matchmaking: waiting queue, pairing and the game_start payload

use std::time::Duration;

use serde_json::json;

use crate::support::websocket::start_test_server;
use crate::support::websocket_client::{paired_clients, WebSocketClient};

#[actix_web::test]
async fn first_player_waits_for_an_opponent() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let mut client = WebSocketClient::connect(&server.ws_url()).await?;

    client.find_game().await?;
    let msg = client.recv_json().await?;
    assert_eq!(msg, json!({ "type": "waiting_for_player" }));

    let stats = server
        .wait_for_stats(|s| s.waiting_games == 1, Duration::from_secs(2))
        .await?;
    assert_eq!(stats.live_games, 1);
    assert_eq!(stats.connections, 1);

    client.close().await?;
    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn second_player_starts_the_game_for_both() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let url = server.ws_url();

    let mut x = WebSocketClient::connect(&url).await?;
    x.find_game().await?;
    x.expect("waiting_for_player").await?;

    let mut o = WebSocketClient::connect(&url).await?;
    o.find_game().await?;

    let x_start = x.expect("game_start").await?;
    let o_start = o.expect("game_start").await?;
    assert_eq!(x_start["state"], o_start["state"]);

    let state = &x_start["state"];
    assert_eq!(state["board"], json!([null, null, null, null, null, null, null, null, null]));
    assert_eq!(state["currentPlayer"], 0);
    assert_eq!(state["gameOver"], false);
    assert_eq!(state["winner"], json!(null));

    let players = state["players"].as_array().ok_or("players should be an array")?;
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["symbol"], "X");
    assert_eq!(players[1]["symbol"], "O");
    assert_ne!(players[0]["id"], players[1]["id"]);

    let stats = server
        .wait_for_stats(|s| s.waiting_games == 0, Duration::from_secs(2))
        .await?;
    assert_eq!(stats.live_games, 1);

    x.close().await?;
    o.close().await?;
    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn third_player_opens_a_new_waiting_game() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let url = server.ws_url();
    let (mut x, mut o, _) = paired_clients(&url).await?;

    let mut third = WebSocketClient::connect(&url).await?;
    third.find_game().await?;
    third.expect("waiting_for_player").await?;

    // Nothing leaks into the running game
    x.expect_silence().await?;
    o.expect_silence().await?;

    let stats = server
        .wait_for_stats(|s| s.live_games == 2, Duration::from_secs(2))
        .await?;
    assert_eq!(stats.waiting_games, 1);

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn repeated_find_game_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let mut client = WebSocketClient::connect(&server.ws_url()).await?;

    client.find_game().await?;
    client.expect("waiting_for_player").await?;
    client.find_game().await?;
    client.expect_silence().await?;

    let stats = server.stats().await?;
    assert_eq!(stats.waiting_games, 1);
    assert_eq!(stats.live_games, 1);

    server.stop().await;
    Ok(())
}
