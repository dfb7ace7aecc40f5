//! Settlement suggestions.
//!
//! Turns a set of balances into pairwise transfers that bring every balance
//! back to zero. The matching is greedy, largest first:
//!
//! 1. creditors (`> +TOLERANCE`) are sorted by balance, largest first;
//! 2. debtors (`< -TOLERANCE`) are sorted by balance, most negative first;
//! 3. each debtor pays the creditors in order, `min(debt, credit)` at a time,
//!    until its debt or the creditor list is exhausted.
//!
//! Both sorts are stable, so participants with equal balances keep the order
//! they had in the input. The output is at most `debtors + creditors - 1`
//! transfers long, which is not always the smallest possible count.

use serde::{Deserialize, Serialize};

use crate::{Balance, Money, ParticipantId};

/// A suggested payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

struct Position<'a> {
    participant: &'a ParticipantId,
    remaining: Money,
}

/// Computes the transfers settling `balances`.
///
/// Balances within [`Money::TOLERANCE`] of zero are considered settled and
/// never appear in a transfer. Returns an empty list when everyone is settled.
pub fn compute_settlements(balances: &[Balance]) -> Vec<Settlement> {
    let mut creditors: Vec<&Balance> = balances.iter().filter(|b| b.amount.is_credit()).collect();
    let mut debtors: Vec<&Balance> = balances.iter().filter(|b| b.amount.is_debt()).collect();

    creditors.sort_by(|a, b| b.amount.cmp(&a.amount));
    debtors.sort_by(|a, b| a.amount.cmp(&b.amount));

    let mut creditors: Vec<Position<'_>> = creditors
        .into_iter()
        .map(|b| Position {
            participant: &b.participant,
            remaining: b.amount,
        })
        .collect();

    let mut settlements = Vec::new();

    for debtor in &debtors {
        let mut debt = debtor.amount.abs();

        for creditor in creditors.iter_mut() {
            if !debt.is_credit() {
                break;
            }
            if !creditor.remaining.is_credit() {
                continue;
            }

            let amount = debt.min(creditor.remaining);
            settlements.push(Settlement {
                from: debtor.participant.clone(),
                to: creditor.participant.clone(),
                amount,
            });

            creditor.remaining -= amount;
            debt -= amount;
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = settlements.len(),
        "computed settlements"
    );

    settlements
}
