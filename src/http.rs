#![cfg(feature = "std")]

//! Single-shot HTTP front end over one shared game.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::net::{TcpListener, ToSocketAddrs};
use tokio::sync::Mutex;

use crate::{common::GameError, game::Game};

/// Game shared between request handlers. The mutex funnels every shot
/// through one holder at a time so no update is lost.
pub type SharedGame = Arc<Mutex<Game>>;

/// JSON body returned by `GET /shot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResponse {
    pub hit: bool,
    pub destroyed: bool,
    pub shots: u64,
    pub board: String,
    pub over: bool,
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub fn shared(game: Game) -> SharedGame {
    Arc::new(Mutex::new(game))
}

/// Routes: `GET /shot?r=<int>&c=<int>` and `GET /board`.
pub fn router(game: SharedGame) -> Router {
    Router::new()
        .route("/shot", get(shot))
        .route("/board", get(board))
        .with_state(game)
}

/// Extract `r` and `c` from the query. A repeated key resolves to its first
/// value; empty values count as missing.
pub fn parse_params(params: &[(String, String)]) -> Result<(i64, i64), GameError> {
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    };
    let (Some(r), Some(c)) = (get("r"), get("c")) else {
        return Err(GameError::MalformedInput("Need r and c".to_string()));
    };
    match (r.parse::<i64>(), c.parse::<i64>()) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(GameError::MalformedInput(
            "r and c must be numbers".to_string(),
        )),
    }
}

async fn shot(
    State(game): State<SharedGame>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ShotResponse>, GameError> {
    let (r, c) = parse_params(&params)?;
    let mut game = game.lock().await;
    let res = game.take_shot(r, c).map_err(|e| {
        debug!("rejected shot ({}, {}): {}", r, c, e);
        e
    })?;
    Ok(Json(ShotResponse {
        hit: res.hit,
        destroyed: res.destroyed,
        shots: game.shots(),
        board: game.board().render(),
        over: game.is_over(),
    }))
}

async fn board(State(game): State<SharedGame>) -> impl IntoResponse {
    let rendered = game.lock().await.board().render();
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        rendered,
    )
}

/// Serve on an already bound listener until the process stops.
pub async fn serve_on(listener: TcpListener, game: SharedGame) -> anyhow::Result<()> {
    info!("HTTP server listening on {}", listener.local_addr()?);
    axum::serve(listener, router(game)).await?;
    Ok(())
}

/// Bind `addr` and serve. Failing to bind is fatal for the caller.
pub async fn serve<A: ToSocketAddrs>(addr: A, game: SharedGame) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind HTTP listener: {}", e))?;
    serve_on(listener, game).await
}
