//! Wire types of the HTTP API.
//!
//! Amounts are decimal currency values. They are serialized as JSON strings
//! (`"12.34"`) and accepted either as strings or as JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod room {
    use super::*;
    use crate::expense::ExpenseView;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ParticipantView {
        pub id: String,
        pub name: Option<String>,
        pub email: Option<String>,
    }

    /// Everything needed to compute the balances of a room.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct RoomSnapshot {
        pub participants: Vec<ParticipantView>,
        #[serde(default)]
        pub expenses: Vec<ExpenseView>,
        /// Participant id the summary is rendered for.
        pub viewer: Option<String>,
    }
}

pub mod expense {
    use super::*;
    use crate::room::ParticipantView;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum SplitType {
        #[default]
        Equal,
        Proportional,
        Custom,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SplitView {
        pub participant_id: String,
        pub amount: Decimal,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: String,
        pub amount: Decimal,
        pub paid_by: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub split_type: SplitType,
        pub splits: Vec<SplitView>,
    }

    /// An expense submitted by a user.
    ///
    /// For `EQUAL` expenses `selected` lists the participants sharing the
    /// amount (empty means the whole room) and `splits` is ignored.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseDraft {
        /// Set when the draft edits an existing expense.
        pub id: Option<String>,
        pub amount: Decimal,
        pub description: String,
        pub paid_by: String,
        #[serde(default)]
        pub split_type: SplitType,
        #[serde(default)]
        pub selected: Vec<String>,
        #[serde(default)]
        pub splits: Vec<SplitView>,
    }

    /// Request body for validating a draft against the room participants.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseValidate {
        pub participants: Vec<ParticipantView>,
        pub draft: ExpenseDraft,
    }
}

pub mod balance {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum BalanceStatus {
        Owed,
        Owes,
        SettledUp,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BalanceView {
        pub participant_id: String,
        pub name: String,
        /// Positive when the participant is owed money.
        pub amount: Decimal,
        pub status: BalanceStatus,
        /// Two-decimal rendering, e.g. `+$20.00` or `Settled up`.
        pub label: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementView {
        pub from: String,
        pub to: String,
        pub from_name: Option<String>,
        pub to_name: Option<String>,
        pub amount: Decimal,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct RoomSummaryView {
        pub balances: Vec<BalanceView>,
        pub settlements: Vec<SettlementView>,
        pub viewer: Option<BalanceView>,
        /// `true` when no transfer is needed.
        pub settled: bool,
    }

    /// A balance supplied by the caller rather than computed from expenses.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BalanceInput {
        pub participant_id: String,
        pub name: Option<String>,
        pub amount: Decimal,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementsRequest {
        pub balances: Vec<BalanceInput>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementsResponse {
        pub settlements: Vec<SettlementView>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_numbers_and_strings() {
        let split: expense::SplitView =
            serde_json::from_str(r#"{"participant_id":"a","amount":12.5}"#).unwrap();
        assert_eq!(split.amount, Decimal::new(1250, 2));
        let split: expense::SplitView =
            serde_json::from_str(r#"{"participant_id":"a","amount":"12.50"}"#).unwrap();
        assert_eq!(split.amount, Decimal::new(1250, 2));
    }

    #[test]
    fn snapshot_defaults_to_no_expenses() {
        let snapshot: room::RoomSnapshot =
            serde_json::from_str(r#"{"participants":[{"id":"a"}]}"#).unwrap();
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.viewer.is_none());
        assert!(snapshot.participants[0].name.is_none());
    }

    #[test]
    fn split_type_is_uppercase() {
        let draft: expense::ExpenseDraft = serde_json::from_str(
            r#"{"amount":"10","description":"Taxi","paid_by":"a","split_type":"CUSTOM"}"#,
        )
        .unwrap();
        assert_eq!(draft.split_type, expense::SplitType::Custom);
        assert!(draft.id.is_none());
    }
}
