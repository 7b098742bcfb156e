//! Error types for debt and plan validation.

use thiserror::Error;

use crate::Amount;
use crate::model::DebtId;

/// A debt record that cannot take part in a plan.
#[derive(Debug, Error, PartialEq)]
pub enum DebtError {
    #[error("name is empty")]
    EmptyName,
    #[error("balance {0} is negative")]
    NegativeBalance(Amount),
    #[error("interest rate {0} must be a non-negative number")]
    InvalidInterestRate(f64),
    #[error("minimum payment {0} must be positive")]
    NonPositiveMinimum(Amount),
}

/// Reasons a plan should not be presented as a valid payoff plan.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("plan has no debts")]
    NoDebts,

    #[error("debt {id}: {source}")]
    InvalidDebt { id: DebtId, source: DebtError },

    #[error("monthly payment {payment} is below the total minimum payments {required}")]
    InsufficientPayment { payment: Amount, required: Amount },
}

/// Error from [`DebtBook`](crate::book::DebtBook) mutations.
#[derive(Debug, Error, PartialEq)]
pub enum BookError {
    #[error("duplicate debt id {0}")]
    DuplicateId(DebtId),

    #[error("debt {0} not found")]
    UnknownId(DebtId),

    #[error("debt {id}: {source}")]
    InvalidDebt { id: DebtId, source: DebtError },
}
