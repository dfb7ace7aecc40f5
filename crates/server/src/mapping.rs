//! Conversions between wire types and engine types.

use api_types::{
    balance::{BalanceInput, BalanceStatus as ApiStatus, BalanceView, SettlementView},
    expense::{ExpenseDraft as ApiDraft, ExpenseView, SplitType as ApiSplitType, SplitView},
    room::ParticipantView,
};
use engine::{
    Balance, BalanceStatus, EngineError, Expense, ExpenseDraft, Money, Participant, Settlement,
    SettlementLine, Split, SplitType,
};
use rust_decimal::Decimal;

/// Amounts arriving from the wire are bounded by [`Money::LIMIT`].
fn amount(value: Decimal) -> Result<Money, EngineError> {
    Money::new(value).within_limit()
}

pub fn participant(view: ParticipantView) -> Participant {
    Participant {
        id: view.id.into(),
        name: view.name,
        email: view.email,
    }
}

fn split_type(kind: ApiSplitType) -> SplitType {
    match kind {
        ApiSplitType::Equal => SplitType::Equal,
        ApiSplitType::Proportional => SplitType::Proportional,
        ApiSplitType::Custom => SplitType::Custom,
    }
}

fn map_split_type(kind: SplitType) -> ApiSplitType {
    match kind {
        SplitType::Equal => ApiSplitType::Equal,
        SplitType::Proportional => ApiSplitType::Proportional,
        SplitType::Custom => ApiSplitType::Custom,
    }
}

fn split(view: SplitView) -> Result<Split, EngineError> {
    Ok(Split::new(view.participant_id, amount(view.amount)?))
}

pub fn expense(view: ExpenseView) -> Result<Expense, EngineError> {
    Ok(Expense {
        id: view.id,
        amount: amount(view.amount)?,
        paid_by: view.paid_by.into(),
        description: view.description,
        split_type: split_type(view.split_type),
        splits: view
            .splits
            .into_iter()
            .map(split)
            .collect::<Result<_, _>>()?,
    })
}

pub fn map_expense(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        amount: expense.amount.value(),
        paid_by: expense.paid_by.to_string(),
        description: expense.description,
        split_type: map_split_type(expense.split_type),
        splits: expense
            .splits
            .into_iter()
            .map(|s| SplitView {
                participant_id: s.participant.to_string(),
                amount: s.amount.value(),
            })
            .collect(),
    }
}

pub fn draft(view: ApiDraft) -> Result<ExpenseDraft, EngineError> {
    Ok(ExpenseDraft {
        id: view.id,
        amount: amount(view.amount)?,
        description: view.description,
        paid_by: view.paid_by.into(),
        split_type: split_type(view.split_type),
        selected: view.selected.into_iter().map(Into::into).collect(),
        splits: view
            .splits
            .into_iter()
            .map(split)
            .collect::<Result<_, _>>()?,
    })
}

pub fn balance(input: BalanceInput) -> Result<Balance, EngineError> {
    let name = input
        .name
        .unwrap_or_else(|| engine::UNKNOWN_NAME.to_string());
    Ok(Balance::new(
        input.participant_id,
        name,
        amount(input.amount)?,
    ))
}

pub fn map_balance(balance: &Balance) -> BalanceView {
    BalanceView {
        participant_id: balance.participant.to_string(),
        name: balance.name.clone(),
        amount: balance.amount.value(),
        status: match balance.status() {
            BalanceStatus::Owed => ApiStatus::Owed,
            BalanceStatus::Owes => ApiStatus::Owes,
            BalanceStatus::SettledUp => ApiStatus::SettledUp,
        },
        label: balance.label(),
    }
}

pub fn map_settlement(settlement: Settlement) -> SettlementView {
    SettlementView {
        from: settlement.from.to_string(),
        to: settlement.to.to_string(),
        from_name: None,
        to_name: None,
        amount: settlement.amount.value(),
    }
}

pub fn map_settlement_line(line: SettlementLine) -> SettlementView {
    SettlementView {
        from_name: Some(line.from_name),
        to_name: Some(line.to_name),
        ..map_settlement(line.settlement)
    }
}
