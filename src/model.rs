//! Core domain types for the payoff simulator.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::Amount;

/// Debt identifier.
pub type DebtId = String;

/// Kind of debt being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    PersonalLoan,
    /// Also used for records written before the type was tracked.
    #[default]
    Other,
}

impl fmt::Display for DebtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DebtType::CreditCard => "Credit Card",
            DebtType::PersonalLoan => "Personal Loan",
            DebtType::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A single owed balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub kind: DebtType,
    /// Principal currently owed.
    pub balance: Amount,
    /// Annual percentage rate, `18.99` meaning 18.99%/year.
    pub interest_rate: f64,
    pub minimum_payment: Amount,
    /// Informational only.
    pub created_at: Option<String>,
}

impl Debt {
    pub fn new(
        id: impl Into<DebtId>,
        name: impl Into<String>,
        balance: Amount,
        interest_rate: f64,
        minimum_payment: Amount,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DebtType::default(),
            balance,
            interest_rate,
            minimum_payment,
            created_at: None,
        }
    }

    pub fn with_kind(mut self, kind: DebtType) -> Self {
        self.kind = kind;
        self
    }

    /// Monthly periodic rate derived from the APR.
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }
}

/// Strategy deciding which debt receives the surplus each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoffMethod {
    /// Smallest balance first.
    Snowball,
    /// Highest interest rate first.
    Avalanche,
    /// Caller-provided order.
    Custom,
}

impl fmt::Display for PayoffMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayoffMethod::Snowball => "Snowball (smallest balance first)",
            PayoffMethod::Avalanche => "Avalanche (highest interest first)",
            PayoffMethod::Custom => "Custom",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payoff method '{0}', expected snowball, avalanche or custom")]
pub struct ParseMethodError(pub String);

impl FromStr for PayoffMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffMethod::Snowball),
            "avalanche" => Ok(PayoffMethod::Avalanche),
            "custom" => Ok(PayoffMethod::Custom),
            other => Err(ParseMethodError(other.to_string())),
        }
    }
}

/// Simulation input.
#[derive(Debug, Clone)]
pub struct PayoffPlan {
    pub method: PayoffMethod,
    /// Total budget available per month across all debts.
    pub monthly_payment: Amount,
    pub debts: Vec<Debt>,
    /// Debt ids in payoff order, only consulted for [`PayoffMethod::Custom`].
    pub custom_order: Option<Vec<DebtId>>,
}

impl PayoffPlan {
    pub fn new(method: PayoffMethod, monthly_payment: Amount, debts: Vec<Debt>) -> Self {
        Self {
            method,
            monthly_payment,
            debts,
            custom_order: None,
        }
    }

    pub fn with_custom_order(mut self, order: Vec<DebtId>) -> Self {
        self.custom_order = Some(order);
        self
    }

    pub fn total_minimum_payments(&self) -> Amount {
        self.debts.iter().map(|d| d.minimum_payment).sum()
    }
}

/// One debt's payment record within one month.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffStep {
    pub debt_id: DebtId,
    pub debt_name: String,
    /// 1-based month index.
    pub month: u32,
    pub payment: Amount,
    /// Balance right after this month's payments.
    pub remaining_balance: Amount,
    /// Interest accrued on the debt this month.
    pub interest_paid: Amount,
}

/// Simulation output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayoffSchedule {
    /// One entry per simulated month.
    pub steps: Vec<Vec<PayoffStep>>,
    pub total_months: u32,
    pub total_interest: Amount,
    pub total_payments: Amount,
}
