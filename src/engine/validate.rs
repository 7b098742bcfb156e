use super::{DebtError, PlanError};
use crate::Amount;
use crate::model::{Debt, PayoffPlan};

impl Debt {
    /// Check the debt is usable for planning:
    /// - name is not blank
    /// - balance is not negative
    /// - interest rate is finite and not negative
    /// - minimum payment is positive
    pub fn validate(&self) -> Result<(), DebtError> {
        if self.name.trim().is_empty() {
            return Err(DebtError::EmptyName);
        }
        if self.balance < Amount::ZERO {
            return Err(DebtError::NegativeBalance(self.balance));
        }
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(DebtError::InvalidInterestRate(self.interest_rate));
        }
        if !self.minimum_payment.is_positive() {
            return Err(DebtError::NonPositiveMinimum(self.minimum_payment));
        }
        Ok(())
    }
}

impl PayoffPlan {
    /// Whether the schedule for this plan can be presented as a valid plan:
    /// at least one debt, every debt valid, and a monthly payment covering
    /// every minimum payment.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.debts.is_empty() {
            return Err(PlanError::NoDebts);
        }

        for debt in &self.debts {
            debt.validate().map_err(|source| PlanError::InvalidDebt {
                id: debt.id.clone(),
                source,
            })?;
        }

        let required = self.total_minimum_payments();
        if self.monthly_payment < required {
            return Err(PlanError::InsufficientPayment {
                payment: self.monthly_payment,
                required,
            });
        }

        Ok(())
    }
}
