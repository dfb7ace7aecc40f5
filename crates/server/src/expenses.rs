//! Expense endpoints.

use api_types::expense::{ExpenseValidate, ExpenseView};
use axum::{Json, extract::rejection::JsonRejection};

use crate::{ServerError, mapping};

/// Validates a draft against the room and returns the expense that would be
/// stored, with EQUAL splits derived.
pub async fn validate(
    payload: Result<Json<ExpenseValidate>, JsonRejection>,
) -> Result<Json<ExpenseView>, ServerError> {
    let Json(payload) = payload?;
    let participants: Vec<_> = payload
        .participants
        .into_iter()
        .map(mapping::participant)
        .collect();

    let expense = mapping::draft(payload.draft)?.validate(&participants)?;
    tracing::debug!(
        expense = %expense.id,
        split_type = expense.split_type.as_str(),
        splits = expense.splits.len(),
        "validated expense"
    );

    Ok(Json(mapping::map_expense(expense)))
}
