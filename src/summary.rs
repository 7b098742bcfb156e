//! Aggregate statistics over debts and schedules.

use std::collections::HashMap;

use crate::Amount;
use crate::model::{Debt, PayoffSchedule};

/// Non-temporal statistics for a debt list.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtSummary {
    pub total_balance: Amount,
    pub total_minimum_payments: Amount,
    /// Balance-weighted average APR, in percent.
    pub weighted_interest_rate: f64,
    pub count: usize,
}

/// Summarize debts without simulating anything.
///
/// The weighted rate of a zero total balance is `0`.
pub fn debt_summary(debts: &[Debt]) -> DebtSummary {
    let total_balance: Amount = debts.iter().map(|d| d.balance).sum();
    let total_minimum_payments = debts.iter().map(|d| d.minimum_payment).sum();

    let weighted_interest_rate = if total_balance == Amount::ZERO {
        0.0
    } else {
        let weighted: f64 = debts
            .iter()
            .map(|d| d.balance.to_float() * d.interest_rate)
            .sum();
        weighted / total_balance.to_float()
    };

    DebtSummary {
        total_balance,
        total_minimum_payments,
        weighted_interest_rate,
        count: debts.len(),
    }
}

/// `amount` as a percentage of a monthly income, e.g. debt-to-income.
/// `None` when there is no positive income to compare against.
pub fn income_share(amount: Amount, monthly_income: Amount) -> Option<f64> {
    monthly_income
        .is_positive()
        .then(|| amount.to_float() / monthly_income.to_float() * 100.0)
}

impl PayoffSchedule {
    pub fn years(&self) -> f64 {
        f64::from(self.total_months) / 12.0
    }

    /// First month in which the debt's remaining balance reached zero.
    pub fn payoff_month(&self, debt_id: &str) -> Option<u32> {
        self.steps
            .iter()
            .flatten()
            .find(|step| step.debt_id == debt_id && step.remaining_balance == Amount::ZERO)
            .map(|step| step.month)
    }

    /// Total outstanding balance at month 0 and after every simulated month.
    ///
    /// A debt without a payment in a given month keeps its last recorded
    /// balance, so underfunded months do not show that debt's new interest.
    pub fn balance_history(&self, debts: &[Debt]) -> Vec<Amount> {
        let mut balances: HashMap<&str, Amount> =
            debts.iter().map(|d| (d.id.as_str(), d.balance)).collect();

        let mut history = Vec::with_capacity(self.steps.len() + 1);
        history.push(balances.values().sum());
        for month in &self.steps {
            for step in month {
                balances.insert(step.debt_id.as_str(), step.remaining_balance);
            }
            history.push(balances.values().sum());
        }
        history
    }

    /// Whether every debt was paid off, as opposed to the simulation being
    /// stopped by the month cap.
    pub fn is_complete(&self, debts: &[Debt]) -> bool {
        self.balance_history(debts)
            .last()
            .is_some_and(|total| *total == Amount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_payoff_schedule;
    use crate::model::{PayoffMethod, PayoffPlan};

    fn debt(id: &str, balance: f64, rate: f64, minimum: f64) -> Debt {
        Debt::new(id, id, Amount::from_float(balance), rate, Amount::from_float(minimum))
    }

    #[test]
    fn summary_totals() {
        let debts = vec![debt("a", 1000.0, 20.0, 30.0), debt("b", 3000.0, 10.0, 70.0)];
        let summary = debt_summary(&debts);

        assert_eq!(summary.total_balance, Amount::from_float(4000.0));
        assert_eq!(summary.total_minimum_payments, Amount::from_float(100.0));
        // (1000*20 + 3000*10) / 4000
        assert!((summary.weighted_interest_rate - 12.5).abs() < 1e-9);
        assert_eq!(summary.count, 2);
    }

    #[test]
    fn summary_of_zero_balance_has_zero_rate() {
        let summary = debt_summary(&[debt("a", 0.0, 10.0, 25.0)]);
        assert_eq!(summary.weighted_interest_rate, 0.0);
        assert!(!summary.weighted_interest_rate.is_nan());
        assert_eq!(summary.count, 1);
    }

    #[test]
    fn summary_of_no_debts() {
        let summary = debt_summary(&[]);
        assert_eq!(summary.total_balance, Amount::ZERO);
        assert_eq!(summary.weighted_interest_rate, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn income_share_percentages() {
        let share = income_share(Amount::from_float(500.0), Amount::from_float(4000.0));
        assert_eq!(share, Some(12.5));
        assert_eq!(income_share(Amount::from_float(500.0), Amount::ZERO), None);
    }

    #[test]
    fn schedule_helpers() {
        let debts = vec![debt("a", 300.0, 0.0, 100.0), debt("b", 500.0, 0.0, 100.0)];
        let plan = PayoffPlan::new(PayoffMethod::Snowball, Amount::from_float(300.0), debts.clone());
        let schedule = calculate_payoff_schedule(&plan);

        // month 1: a 200 (100 + 100 surplus), b 100
        // month 2: a 100 paid off, b 200
        // month 3: b 200 paid off
        assert_eq!(schedule.total_months, 3);
        assert_eq!(schedule.years(), 0.25);
        assert_eq!(schedule.payoff_month("a"), Some(2));
        assert_eq!(schedule.payoff_month("b"), Some(3));
        assert_eq!(schedule.payoff_month("ghost"), None);

        let history: Vec<String> = schedule
            .balance_history(&debts)
            .iter()
            .map(Amount::to_string)
            .collect();
        assert_eq!(history, ["800.00", "500.00", "200.00", "0.00"]);
        assert!(schedule.is_complete(&debts));
    }

    #[test]
    fn capped_schedule_is_not_complete() {
        let debts = vec![debt("a", 1000.0, 30.0, 10.0)];
        let plan = PayoffPlan::new(PayoffMethod::Avalanche, Amount::from_float(10.0), debts.clone());
        let schedule = calculate_payoff_schedule(&plan);
        assert!(!schedule.is_complete(&debts));
    }

    #[test]
    fn empty_schedule_history_is_initial_balance() {
        let schedule = PayoffSchedule::default();
        assert_eq!(schedule.balance_history(&[]), [Amount::ZERO]);
        assert!(schedule.is_complete(&[]));
    }
}
