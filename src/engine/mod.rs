//! Payoff schedule simulator.
//!
//! Advances working copies of a plan's debts month by month: interest
//! accrues on every debt, minimums are paid in priority order, and whatever
//! budget is left goes to the first debt in priority order that still has a
//! balance. The simulation is pure and deterministic.

use tracing::{debug, info, warn};

use crate::Amount;
use crate::model::{PayoffPlan, PayoffSchedule, PayoffStep};

mod state;
pub use state::WorkingDebt;

mod order;
pub use order::prioritize;

mod error;
pub use error::{BookError, DebtError, PlanError};

mod validate;

/// Hard stop for the simulation loop (50 years).
///
/// This is a termination fail-safe for plans whose payment never outpaces
/// interest, not a business rule.
pub const MAX_MONTHS: u32 = 600;

/// Compute the full payoff schedule for a plan.
///
/// Never fails: an empty plan yields an empty schedule and an underfunded
/// plan runs until [`MAX_MONTHS`]. Use [`PayoffPlan::validate`] first to
/// decide whether the result is a meaningful plan.
pub fn calculate_payoff_schedule(plan: &PayoffPlan) -> PayoffSchedule {
    Simulation::new(plan).run()
}

/// Month-by-month simulation state.
///
/// Debts are held in priority order.
#[derive(Debug, Clone)]
pub struct Simulation {
    debts: Vec<WorkingDebt>,
    monthly_payment: Amount,
    month: u32,
    total_interest: Amount,
    total_payments: Amount,
    steps: Vec<Vec<PayoffStep>>,
}

/// Public API
impl Simulation {
    pub fn new(plan: &PayoffPlan) -> Self {
        let ordered = prioritize(&plan.debts, plan.method, plan.custom_order.as_deref());
        Self {
            debts: ordered.into_iter().map(WorkingDebt::from).collect(),
            monthly_payment: plan.monthly_payment,
            month: 0,
            total_interest: Amount::ZERO,
            total_payments: Amount::ZERO,
            steps: Vec::new(),
        }
    }

    /// True once every working balance is zero.
    pub fn is_settled(&self) -> bool {
        !self.debts.iter().any(WorkingDebt::has_balance)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Working debts in priority order.
    pub fn debts(&self) -> &[WorkingDebt] {
        &self.debts
    }

    /// Remaining principal across all working debts.
    pub fn outstanding(&self) -> Amount {
        self.debts.iter().map(|d| d.balance).sum()
    }

    /// Run until settled or until [`MAX_MONTHS`] have elapsed.
    pub fn run(mut self) -> PayoffSchedule {
        while !self.is_settled() {
            self.advance_month();
            if self.month >= MAX_MONTHS {
                if !self.is_settled() {
                    warn!(
                        months = MAX_MONTHS,
                        outstanding = %self.outstanding(),
                        "simulation stopped at month cap with balance remaining"
                    );
                }
                break;
            }
        }

        info!(
            months = self.month,
            total_interest = %self.total_interest,
            total_payments = %self.total_payments,
            "payoff schedule computed"
        );

        PayoffSchedule {
            steps: self.steps,
            total_months: self.month,
            total_interest: self.total_interest,
            total_payments: self.total_payments,
        }
    }

    /// Simulate a single month and return the payments recorded for it.
    pub fn advance_month(&mut self) -> &[PayoffStep] {
        self.month += 1;
        let interest = self.accrue_interest();
        let mut budget = self.monthly_payment;
        let mut steps = self.pay_minimums(&interest, &mut budget);
        if budget.is_positive() {
            self.pay_surplus(&interest, budget, &mut steps);
        }

        debug!(
            month = self.month,
            payments = steps.len(),
            outstanding = %self.outstanding(),
            "month simulated"
        );

        self.steps.push(steps);
        self.steps.last().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Private API
impl Simulation {
    /// Accrue interest on every debt with a balance before any payment is
    /// applied. Returns the interest per debt, aligned with `self.debts`.
    fn accrue_interest(&mut self) -> Vec<Amount> {
        let interest: Vec<Amount> = self
            .debts
            .iter_mut()
            .map(|debt| {
                if debt.has_balance() {
                    debt.accrue_interest()
                } else {
                    Amount::ZERO
                }
            })
            .collect();
        self.total_interest += interest.iter().sum::<Amount>();
        interest
    }

    /// Pay each debt's minimum in priority order while budget lasts.
    ///
    /// An underfunded budget runs out on the lowest-priority debts first.
    fn pay_minimums(&mut self, interest: &[Amount], budget: &mut Amount) -> Vec<PayoffStep> {
        let mut steps = Vec::new();
        for (debt, interest) in self.debts.iter_mut().zip(interest) {
            if !debt.has_balance() {
                continue;
            }
            let payment = debt.minimum_payment.min(debt.balance).min(*budget);
            if !payment.is_positive() {
                continue;
            }
            debt.pay(payment);
            *budget -= payment;
            self.total_payments += payment;
            steps.push(debt.step(self.month, payment, *interest));
        }
        steps
    }

    /// Send the remaining budget to the highest-priority debt with a balance,
    /// merging into its minimum-payment step when it has one.
    fn pay_surplus(&mut self, interest: &[Amount], budget: Amount, steps: &mut Vec<PayoffStep>) {
        let Some(idx) = self.debts.iter().position(WorkingDebt::has_balance) else {
            return;
        };
        let debt = &mut self.debts[idx];
        let payment = debt.pay(budget);
        self.total_payments += payment;

        match steps.iter_mut().find(|step| step.debt_id == debt.id) {
            Some(step) => {
                step.payment += payment;
                step.remaining_balance = debt.balance;
            }
            None => steps.push(debt.step(self.month, payment, interest[idx])),
        }
    }
}
