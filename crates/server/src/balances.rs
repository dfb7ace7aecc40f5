//! Balance and settlement endpoints.

use api_types::{
    balance::{RoomSummaryView, SettlementsRequest, SettlementsResponse},
    room::RoomSnapshot,
};
use axum::{Json, extract::rejection::JsonRejection};
use engine::EngineError;

use crate::{ServerError, mapping};

/// Computes the balance summary of a room snapshot.
///
/// Fails with [`EngineError::InvalidAmount`] when an amount exceeds
/// [`engine::Money::LIMIT`].
pub fn summarize_snapshot(snapshot: RoomSnapshot) -> Result<RoomSummaryView, EngineError> {
    let participants: Vec<_> = snapshot
        .participants
        .into_iter()
        .map(mapping::participant)
        .collect();
    let expenses = snapshot
        .expenses
        .into_iter()
        .map(mapping::expense)
        .collect::<Result<Vec<_>, _>>()?;

    let summary = engine::summarize(&participants, &expenses, snapshot.viewer.as_deref());
    let settled = summary.is_settled();

    Ok(RoomSummaryView {
        balances: summary.balances.iter().map(mapping::map_balance).collect(),
        viewer: summary.viewer.as_ref().map(mapping::map_balance),
        settlements: summary
            .settlements
            .into_iter()
            .map(mapping::map_settlement_line)
            .collect(),
        settled,
    })
}

pub async fn summary(
    payload: Result<Json<RoomSnapshot>, JsonRejection>,
) -> Result<Json<RoomSummaryView>, ServerError> {
    let Json(payload) = payload?;
    Ok(Json(summarize_snapshot(payload)?))
}

pub async fn settlements(
    payload: Result<Json<SettlementsRequest>, JsonRejection>,
) -> Result<Json<SettlementsResponse>, ServerError> {
    let Json(payload) = payload?;
    let balances = payload
        .balances
        .into_iter()
        .map(mapping::balance)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(SettlementsResponse {
        settlements: engine::compute_settlements(&balances)
            .into_iter()
            .map(mapping::map_settlement)
            .collect(),
    }))
}
