//! Expenses and their splits.
//!
//! An [`Expense`] is paid in full by one participant and attributed to
//! participants through its [`Split`]s. Every expense reaching the balance
//! computation is expected to satisfy `sum(splits) == amount` within
//! [`Money::TOLERANCE`]; this is checked on the write path (see
//! [`ExpenseDraft`](crate::ExpenseDraft)), not while computing balances.

use serde::{Deserialize, Serialize};

use crate::{Money, ParticipantId};

/// How the splits of an expense were produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitType {
    /// The amount is divided equally among the selected participants.
    #[default]
    Equal,
    /// Splits supplied by the caller, weighted by some external ratio.
    Proportional,
    /// Splits supplied by the caller verbatim.
    Custom,
}

impl SplitType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::Proportional => "PROPORTIONAL",
            Self::Custom => "CUSTOM",
        }
    }
}

/// The portion of an expense attributed to one participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub participant: ParticipantId,
    pub amount: Money,
}

impl Split {
    pub fn new(participant: impl Into<ParticipantId>, amount: Money) -> Self {
        Self {
            participant: participant.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: Money,
    pub paid_by: ParticipantId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub split_type: SplitType,
    pub splits: Vec<Split>,
}

impl Expense {
    /// Builds an expense from explicit splits.
    ///
    /// The split type is [`SplitType::Custom`] because the caller supplies
    /// the splits. A deserialized expense without a `split_type` falls back to
    /// [`SplitType::Equal`], the wire default.
    pub fn new(
        id: impl Into<String>,
        amount: Money,
        paid_by: impl Into<ParticipantId>,
        splits: Vec<Split>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            paid_by: paid_by.into(),
            description: String::new(),
            split_type: SplitType::Custom,
            splits,
        }
    }

    /// Sum of all split amounts.
    pub fn split_total(&self) -> Money {
        self.splits.iter().map(|s| s.amount).sum()
    }

    /// Returns `true` if the splits add up to the amount within tolerance.
    pub fn is_balanced(&self) -> bool {
        self.split_total().approx_eq(self.amount)
    }
}
