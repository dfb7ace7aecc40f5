//! Net balances of the participants of a room.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Expense, Money, Participant, ParticipantId, participant::display_name};

/// Net position of a participant, judged with [`Money::TOLERANCE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// The participant is owed money.
    Owed,
    /// The participant owes money.
    Owes,
    SettledUp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub participant: ParticipantId,
    pub name: String,
    /// Positive when the participant is owed money, negative when they owe.
    pub amount: Money,
}

impl Balance {
    pub fn new(
        participant: impl Into<ParticipantId>,
        name: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            participant: participant.into(),
            name: name.into(),
            amount,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        if self.amount.is_credit() {
            BalanceStatus::Owed
        } else if self.amount.is_debt() {
            BalanceStatus::Owes
        } else {
            BalanceStatus::SettledUp
        }
    }

    /// User-facing rendering of the balance: `+$20.00`, `-$10.00` or
    /// `Settled up`.
    pub fn label(&self) -> String {
        match self.status() {
            BalanceStatus::Owed => format!("+${}", self.amount),
            BalanceStatus::Owes => format!("-${}", self.amount.abs()),
            BalanceStatus::SettledUp => "Settled up".to_string(),
        }
    }
}

/// Balances keyed by participant, kept in first-appearance order.
///
/// Participants supplied to [`compute_balances`] come first, in the given
/// order; identifiers only referenced by expenses follow in the order they
/// were first met.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    entries: Vec<Balance>,
    index: HashMap<ParticipantId, usize>,
}

impl Balances {
    fn bucket(&mut self, id: &ParticipantId) -> &mut Money {
        let position = match self.index.get(id) {
            Some(position) => *position,
            None => {
                let position = self.entries.len();
                self.entries.push(Balance::new(id.clone(), String::new(), Money::ZERO));
                self.index.insert(id.clone(), position);
                position
            }
        };
        &mut self.entries[position].amount
    }

    pub fn get(&self, id: &str) -> Option<&Balance> {
        self.index.get(id).map(|position| &self.entries[*position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Balance> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Balance] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Balance> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every balance. Zero within tolerance for any expense list whose
    /// splits add up to their amounts.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|b| b.amount).sum()
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a Balance;
    type IntoIter = std::slice::Iter<'a, Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Computes the net balance of every participant from the expense list.
///
/// Each payer is credited the full expense amount and each split participant
/// is debited their split. Identifiers that do not belong to `participants`
/// get their own bucket named [`UNKNOWN_NAME`](crate::UNKNOWN_NAME) instead of
/// failing the computation.
pub fn compute_balances(participants: &[Participant], expenses: &[Expense]) -> Balances {
    let mut balances = Balances::default();

    for participant in participants {
        balances.bucket(&participant.id);
    }

    for expense in expenses {
        *balances.bucket(&expense.paid_by) += expense.amount;
        for split in &expense.splits {
            *balances.bucket(&split.participant) -= split.amount;
        }
    }

    for balance in &mut balances.entries {
        balance.name = display_name(participants, &balance.participant).to_string();
    }

    tracing::debug!(
        participants = participants.len(),
        expenses = expenses.len(),
        buckets = balances.len(),
        "computed balances"
    );

    balances
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Split, UNKNOWN_NAME};

    fn money(value: rust_decimal::Decimal) -> Money {
        Money::new(value)
    }

    #[test]
    fn payer_is_credited_and_splits_are_debited() {
        let participants = vec![
            Participant::new("p1").with_name("Alice"),
            Participant::new("p2").with_name("Bob"),
        ];
        let expenses = vec![Expense::new(
            "e1",
            money(dec!(40)),
            "p1",
            vec![
                Split::new("p1", money(dec!(20))),
                Split::new("p2", money(dec!(20))),
            ],
        )];

        let balances = compute_balances(&participants, &expenses);
        assert_eq!(balances.get("p1").unwrap().amount, money(dec!(20)));
        assert_eq!(balances.get("p2").unwrap().amount, money(dec!(-20)));
        assert_eq!(balances.get("p1").unwrap().name, "Alice");
    }

    #[test]
    fn unknown_ids_get_their_own_bucket() {
        let participants = vec![Participant::new("p1").with_name("Alice")];
        let expenses = vec![Expense::new(
            "e1",
            money(dec!(10)),
            "ghost",
            vec![Split::new("p1", money(dec!(10)))],
        )];

        let balances = compute_balances(&participants, &expenses);
        let ids: Vec<&str> = balances.iter().map(|b| b.participant.as_str()).collect();
        assert_eq!(ids, ["p1", "ghost"]);
        assert_eq!(balances.get("ghost").unwrap().name, UNKNOWN_NAME);
        assert_eq!(balances.get("ghost").unwrap().amount, money(dec!(10)));
    }

    #[test]
    fn duplicated_participants_collapse_into_one_bucket() {
        let participants = vec![Participant::new("p1"), Participant::new("p1")];
        let balances = compute_balances(&participants, &[]);
        assert_eq!(balances.len(), 1);
    }

    #[test]
    fn status_and_label_use_tolerance() {
        let owed = Balance::new("p1", "Alice", money(dec!(20)));
        let owes = Balance::new("p2", "Bob", money(dec!(-10.5)));
        let settled = Balance::new("p3", "Carol", money(dec!(0.004)));
        assert_eq!(owed.status(), BalanceStatus::Owed);
        assert_eq!(owes.status(), BalanceStatus::Owes);
        assert_eq!(settled.status(), BalanceStatus::SettledUp);
        assert_eq!(owed.label(), "+$20.00");
        assert_eq!(owes.label(), "-$10.50");
        assert_eq!(settled.label(), "Settled up");
    }

    #[test]
    fn oversized_amounts_saturate_instead_of_panicking() {
        let participants = vec![Participant::new("p1"), Participant::new("p2")];
        let max = Money::new(rust_decimal::Decimal::MAX);
        let expenses = vec![
            Expense::new("e1", max, "p1", vec![Split::new("p2", max)]),
            Expense::new("e2", max, "p1", vec![Split::new("p2", max)]),
        ];

        let balances = compute_balances(&participants, &expenses);
        assert_eq!(balances.get("p1").unwrap().amount, max);
        assert_eq!(balances.get("p2").unwrap().amount, -max);
    }
}
