use std::time::Instant;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::games::tictactoe::{Action, Board, BoardError, Mark, evaluate};
use common::log;
use serde::{Deserialize, Serialize};

use crate::web_server::WebServerState;

#[derive(Debug, Deserialize)]
pub struct AiMoveRequest {
    #[serde(default)]
    pub board: Option<Vec<Vec<Mark>>>,
}

#[derive(Debug, Serialize)]
pub struct AiMoveResponse {
    #[serde(rename = "move")]
    pub next_move: Option<Action>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
pub enum ApiError {
    MissingBoard,
    InvalidRequest(String),
    InvalidBoard(BoardError),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MissingBoard => write!(f, "missing board"),
            ApiError::InvalidRequest(e) => write!(f, "invalid request: {}", e),
            ApiError::InvalidBoard(e) => write!(f, "invalid board: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<BoardError> for ApiError {
    fn from(e: BoardError) -> Self {
        ApiError::InvalidBoard(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse { error: self.to_string() };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// `POST /api/ai`. The body is read as JSON whatever its declared content type.
pub async fn ai_move(
    State(state): State<WebServerState>,
    body: Bytes,
) -> Result<Json<AiMoveResponse>, ApiError> {
    let result = choose_move(&body, state.validate_boards);
    if let Err(ref e) = result {
        log!("Rejected AI request: {}", e);
    }
    result.map(Json)
}

fn choose_move(body: &[u8], validate_boards: bool) -> Result<AiMoveResponse, ApiError> {
    let request: AiMoveRequest =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    let grid = request.board.ok_or(ApiError::MissingBoard)?;

    let board = Board::from_grid(&grid)?;
    if validate_boards {
        board.check_counts()?;
    }

    if board.is_terminal() {
        log!("Board {} is already decided ({:?}), no move", board, board.outcome());
        return Ok(AiMoveResponse { next_move: None });
    }

    let started = Instant::now();
    let result = evaluate(&board);
    log!(
        "Board {}: {:?} plays {} (value {}, {} nodes, {:?})",
        board,
        board.turn_owner(),
        result.action.map_or_else(|| "nothing".to_string(), |a| a.to_string()),
        result.value,
        result.nodes,
        started.elapsed()
    );

    Ok(AiMoveResponse { next_move: result.action })
}
