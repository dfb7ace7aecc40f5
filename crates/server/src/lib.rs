use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::EngineError;
use serde::Serialize;

pub use balances::summarize_snapshot;
pub use server::{router, run_with_listener};

mod balances;
mod expenses;
mod mapping;
mod server;

pub mod types {
    pub mod room {
        pub use api_types::room::{ParticipantView, RoomSnapshot};
    }

    pub mod expense {
        pub use api_types::expense::{
            ExpenseDraft, ExpenseValidate, ExpenseView, SplitType, SplitView,
        };
    }

    pub mod balance {
        pub use api_types::balance::{
            BalanceInput, BalanceStatus, BalanceView, RoomSummaryView, SettlementView,
            SettlementsRequest, SettlementsResponse,
        };
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidAmount(_)
        | EngineError::InvalidSplit(_)
        | EngineError::InvalidDescription(_)
        | EngineError::UnknownParticipant(_)
        | EngineError::EmptySelection => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                tracing::debug!("rejected request: {err}");
                (status_for_engine_error(&err), err.to_string())
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}
