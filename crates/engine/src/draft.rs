//! Write-path validation of expenses.
//!
//! Everything reaching [`compute_balances`](crate::compute_balances) is
//! trusted. This module is where an incoming expense is checked against the
//! room before it is accepted:
//!
//! - the description is trimmed and must hold 1 to [`MAX_DESCRIPTION_LEN`]
//!   characters;
//! - the amount must be positive and at most [`Money::LIMIT`];
//! - the payer and every split participant must belong to the room;
//! - EQUAL splits are derived here, other split types are taken as supplied;
//! - the splits must add up to the amount within [`Money::TOLERANCE`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, Expense, Money, Participant, ParticipantId, ParticipantSelection, ResultEngine,
    Split, SplitType,
};

pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Divides `amount` equally among the selected participants.
///
/// Shares are not rounded: `10.00` among three yields `3.333…` each, and the
/// sub-cent residue is left to the tolerance.
pub fn equal_splits(amount: Money, selection: &ParticipantSelection) -> ResultEngine<Vec<Split>> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be > 0, got {amount}"
        )));
    }
    amount.within_limit()?;
    let share = amount
        .divide_evenly(selection.len())
        .ok_or(EngineError::EmptySelection)?;
    Ok(selection
        .iter()
        .map(|id| Split::new(id.clone(), share))
        .collect())
}

/// An expense as submitted by a user, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Keeps the id of an existing expense when the draft is an update.
    #[serde(default)]
    pub id: Option<String>,
    pub amount: Money,
    pub description: String,
    pub paid_by: ParticipantId,
    #[serde(default)]
    pub split_type: SplitType,
    /// Participants sharing an EQUAL expense. Empty means the whole room.
    #[serde(default)]
    pub selected: Vec<ParticipantId>,
    /// Explicit splits for PROPORTIONAL and CUSTOM expenses.
    #[serde(default)]
    pub splits: Vec<Split>,
}

impl ExpenseDraft {
    /// Validates the draft against the room participants and builds the
    /// expense, deriving EQUAL splits when needed.
    pub fn validate(self, participants: &[Participant]) -> ResultEngine<Expense> {
        let description = normalize_description(&self.description)?;

        if !self.amount.is_positive() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be > 0, got {}",
                self.amount
            )));
        }
        self.amount.within_limit()?;

        let room: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();
        let ensure_member = |id: &ParticipantId| {
            if room.contains(id.as_str()) {
                Ok(())
            } else {
                Err(EngineError::UnknownParticipant(id.to_string()))
            }
        };

        ensure_member(&self.paid_by)?;

        let splits = match self.split_type {
            SplitType::Equal => {
                let selection = if self.selected.is_empty() {
                    ParticipantSelection::new(participants.iter().map(|p| p.id.clone()))?
                } else {
                    ParticipantSelection::new(self.selected)?
                };
                for id in selection.iter() {
                    ensure_member(id)?;
                }
                equal_splits(self.amount, &selection)?
            }
            SplitType::Proportional | SplitType::Custom => {
                if self.splits.is_empty() {
                    return Err(EngineError::InvalidSplit(
                        "at least one split is required".to_string(),
                    ));
                }
                let mut seen = HashSet::new();
                for split in &self.splits {
                    ensure_member(&split.participant)?;
                    split.amount.within_limit()?;
                    if split.amount.is_negative() {
                        return Err(EngineError::InvalidSplit(format!(
                            "split for {} must be >= 0",
                            split.participant
                        )));
                    }
                    if !seen.insert(split.participant.as_str()) {
                        return Err(EngineError::InvalidSplit(format!(
                            "{} appears in more than one split",
                            split.participant
                        )));
                    }
                }
                self.splits
            }
        };

        let expense = Expense {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            amount: self.amount,
            paid_by: self.paid_by,
            description,
            split_type: self.split_type,
            splits,
        };

        if !expense.is_balanced() {
            return Err(EngineError::InvalidSplit(format!(
                "split amounts must sum to the total expense amount ({} != {})",
                expense.split_total(),
                expense.amount
            )));
        }

        Ok(expense)
    }
}

fn normalize_description(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidDescription(
            "description must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(EngineError::InvalidDescription(format!(
            "description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}
