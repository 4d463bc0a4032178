// Disconnect handling: notifying the survivor and tearing down games

use std::time::Duration;

use crate::support::websocket::start_test_server;
use crate::support::websocket_client::{paired_clients, WebSocketClient};

#[actix_web::test]
async fn opponent_is_told_when_player_leaves() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let (mut x, mut o, _) = paired_clients(&server.ws_url()).await?;

    x.close().await?;
    o.expect("player_disconnected").await?;

    let stats = server
        .wait_for_stats(|s| s.connections == 1, Duration::from_secs(2))
        .await?;
    assert_eq!(stats.live_games, 0);
    assert_eq!(stats.waiting_games, 0);

    // The survivor is unbound and no longer in a game
    o.make_move(0).await?;
    o.expect_silence().await?;

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn survivor_can_find_a_new_game() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let url = server.ws_url();
    let (mut x, mut o, _) = paired_clients(&url).await?;

    o.close().await?;
    x.expect("player_disconnected").await?;

    x.find_game().await?;
    x.expect("waiting_for_player").await?;

    let mut newcomer = WebSocketClient::connect(&url).await?;
    newcomer.find_game().await?;
    let start = x.expect("game_start").await?;
    newcomer.expect("game_start").await?;
    assert_eq!(start["state"]["players"][0]["symbol"], "X");

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn waiting_game_is_removed_when_its_creator_leaves() -> Result<(), Box<dyn std::error::Error>>
{
    let server = start_test_server().await?;
    let url = server.ws_url();

    let mut quitter = WebSocketClient::connect(&url).await?;
    quitter.find_game().await?;
    quitter.expect("waiting_for_player").await?;
    quitter.close().await?;

    server
        .wait_for_stats(
            |s| s.connections == 0 && s.live_games == 0 && s.waiting_games == 0,
            Duration::from_secs(2),
        )
        .await?;

    // The next player is not paired with the departed one
    let mut next = WebSocketClient::connect(&url).await?;
    next.find_game().await?;
    next.expect("waiting_for_player").await?;

    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn unpaired_connection_leaves_quietly() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server().await?;
    let mut idle = WebSocketClient::connect(&server.ws_url()).await?;

    server
        .wait_for_stats(|s| s.connections == 1, Duration::from_secs(2))
        .await?;
    idle.close().await?;
    let stats = server
        .wait_for_stats(|s| s.connections == 0, Duration::from_secs(2))
        .await?;
    assert_eq!(stats.live_games, 0);

    server.stop().await;
    Ok(())
}
