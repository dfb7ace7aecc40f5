//! Balance overview of a room as seen by one participant.

use serde::{Deserialize, Serialize};

use crate::{
    Balance, Expense, Participant, Settlement, compute_balances, compute_settlements,
    participant::display_name,
};

/// A settlement with both parties' display names resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    #[serde(flatten)]
    pub settlement: Settlement,
    pub from_name: String,
    pub to_name: String,
}

impl SettlementLine {
    /// `Bob → Alice: $10.00`
    pub fn label(&self) -> String {
        format!(
            "{} → {}: ${}",
            self.from_name, self.to_name, self.settlement.amount
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub balances: Vec<Balance>,
    pub settlements: Vec<SettlementLine>,
    /// Balance of the viewing participant, if they appear in the room.
    pub viewer: Option<Balance>,
}

impl RoomSummary {
    /// `true` when no transfer is needed ("All settled up!").
    pub fn is_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}

/// Computes balances and settlements for a room and resolves display names.
pub fn summarize(
    participants: &[Participant],
    expenses: &[Expense],
    viewer: Option<&str>,
) -> RoomSummary {
    let balances = compute_balances(participants, expenses);
    let viewer = viewer.and_then(|id| balances.get(id)).cloned();

    let settlements = compute_settlements(balances.as_slice())
        .into_iter()
        .map(|settlement| SettlementLine {
            from_name: display_name(participants, &settlement.from).to_string(),
            to_name: display_name(participants, &settlement.to).to_string(),
            settlement,
        })
        .collect();

    RoomSummary {
        balances: balances.into_vec(),
        settlements,
        viewer,
    }
}
