use crate::Amount;
use crate::model::{Debt, DebtId, PayoffStep};

/// Per-simulation copy of a debt. The caller's [`Debt`] is never touched.
#[derive(Debug, Clone)]
pub struct WorkingDebt {
    pub id: DebtId,
    pub name: String,
    pub balance: Amount,
    pub monthly_rate: f64,
    pub minimum_payment: Amount,
}

impl WorkingDebt {
    pub fn has_balance(&self) -> bool {
        self.balance.is_positive()
    }

    /// Add one month of interest to the balance and return it.
    pub fn accrue_interest(&mut self) -> Amount {
        let interest = self.balance.scale(self.monthly_rate);
        self.balance += interest;
        interest
    }

    /// Reduce the balance by at most `amount`, never below zero.
    /// Returns what was actually applied.
    pub fn pay(&mut self, amount: Amount) -> Amount {
        let applied = amount.min(self.balance);
        self.balance -= applied;
        applied
    }

    pub fn step(&self, month: u32, payment: Amount, interest: Amount) -> PayoffStep {
        PayoffStep {
            debt_id: self.id.clone(),
            debt_name: self.name.clone(),
            month,
            payment,
            remaining_balance: self.balance,
            interest_paid: interest,
        }
    }
}

impl From<&Debt> for WorkingDebt {
    fn from(debt: &Debt) -> Self {
        Self {
            id: debt.id.clone(),
            name: debt.name.clone(),
            balance: debt.balance,
            monthly_rate: debt.monthly_rate(),
            minimum_payment: debt.minimum_payment,
        }
    }
}
