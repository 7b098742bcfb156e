//! In-memory debt book.
//!
//! Holds the debts a user is tracking, in insertion order, and hands out
//! snapshots of them for planning. The book owns the records; plans built
//! from it carry clones, so simulations never see later edits.

use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::Amount;
use crate::engine::BookError;
use crate::model::{Debt, DebtId, PayoffMethod, PayoffPlan};
use crate::summary::{DebtSummary, debt_summary};

#[derive(Debug, Default)]
pub struct DebtBook {
    debts: Vec<Debt>,
}

/// Public API
impl DebtBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every debt from the stream. Rejected debts are logged and
    /// skipped. Returns how many debts were added.
    pub async fn load(&mut self, mut stream: impl Stream<Item = Debt> + Unpin) -> usize {
        let mut added = 0;
        while let Some(debt) = stream.next().await {
            let id = debt.id.clone();
            match self.insert(debt) {
                Ok(()) => added += 1,
                Err(e) => warn!(id = %id, reason = %e, "debt skipped"),
            }
        }
        added
    }

    /// Add a new debt. Ids must be unique and the debt must be valid.
    pub fn insert(&mut self, debt: Debt) -> Result<(), BookError> {
        if self.get(&debt.id).is_some() {
            return Err(BookError::DuplicateId(debt.id));
        }
        Self::check(&debt)?;

        info!(
            id = %debt.id,
            name = %debt.name,
            kind = %debt.kind,
            balance = %debt.balance,
            "debt added"
        );
        self.debts.push(debt);
        Ok(())
    }

    /// Replace the fields of an existing debt. The id and creation time of
    /// the stored record are kept.
    pub fn update(&mut self, id: &str, mut debt: Debt) -> Result<(), BookError> {
        let existing = self
            .debts
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| BookError::UnknownId(id.to_string()))?;

        debt.id = existing.id.clone();
        debt.created_at = existing.created_at.clone();
        Self::check(&debt)?;

        info!(id, balance = %debt.balance, "debt updated");
        *existing = debt;
        Ok(())
    }

    /// Remove a debt, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Debt, BookError> {
        let idx = self
            .debts
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| BookError::UnknownId(id.to_string()))?;
        info!(id, "debt removed");
        Ok(self.debts.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }

    pub fn summary(&self) -> DebtSummary {
        debt_summary(&self.debts)
    }

    /// Snapshot the current debts into a plan.
    pub fn plan(
        &self,
        method: PayoffMethod,
        monthly_payment: Amount,
        custom_order: Option<Vec<DebtId>>,
    ) -> PayoffPlan {
        PayoffPlan {
            method,
            monthly_payment,
            debts: self.debts.clone(),
            custom_order,
        }
    }
}

/// Private API
impl DebtBook {
    fn check(debt: &Debt) -> Result<(), BookError> {
        debt.validate().map_err(|source| BookError::InvalidDebt {
            id: debt.id.clone(),
            source,
        })
    }
}
