//! Balance and settlement engine for shared-expense rooms.
//!
//! The engine is a set of pure functions: it holds no state, performs no I/O
//! and can be called concurrently with independent inputs.
//!
//! - [`compute_balances`] derives every participant's net balance from a list
//!   of expenses.
//! - [`compute_settlements`] turns balances into suggested transfers.
//! - [`summarize`] combines both for one viewer, with display names resolved.
//! - [`ExpenseDraft::validate`] is the write-path check run before an expense
//!   is accepted into a room.
//!
//! ```rust
//! use engine::{Expense, Money, Participant, Split, compute_balances, compute_settlements};
//!
//! let participants = vec![Participant::new("p1"), Participant::new("p2")];
//! let expenses = vec![Expense::new(
//!     "e1",
//!     Money::from_minor(20_00),
//!     "p1",
//!     vec![
//!         Split::new("p1", Money::from_minor(10_00)),
//!         Split::new("p2", Money::from_minor(10_00)),
//!     ],
//! )];
//!
//! let balances = compute_balances(&participants, &expenses);
//! let settlements = compute_settlements(balances.as_slice());
//! assert_eq!(settlements.len(), 1);
//! assert_eq!(settlements[0].amount.to_string(), "10.00");
//! ```

pub use balances::{Balance, BalanceStatus, Balances, compute_balances};
pub use draft::{ExpenseDraft, MAX_DESCRIPTION_LEN, equal_splits};
pub use error::EngineError;
pub use expense::{Expense, Split, SplitType};
pub use money::Money;
pub use participant::{Participant, ParticipantId, UNKNOWN_NAME};
pub use selection::ParticipantSelection;
pub use settlement::{Settlement, compute_settlements};
pub use summary::{RoomSummary, SettlementLine, summarize};

mod balances;
mod draft;
mod error;
mod expense;
mod money;
mod participant;
mod selection;
mod settlement;
mod summary;

type ResultEngine<T> = Result<T, EngineError>;
