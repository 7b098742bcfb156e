//! Priority ordering of debts for each payoff method.

use crate::model::{Debt, DebtId, PayoffMethod};

/// Return the debts in the order extra payments are directed to them.
///
/// Only references are reordered; balances are untouched. All sorts are
/// stable, so ties keep their input order.
pub fn prioritize<'a>(
    debts: &'a [Debt],
    method: PayoffMethod,
    custom_order: Option<&[DebtId]>,
) -> Vec<&'a Debt> {
    let mut ordered: Vec<&Debt> = debts.iter().collect();
    match method {
        PayoffMethod::Snowball => ordered.sort_by_key(|d| d.balance),
        PayoffMethod::Avalanche => {
            ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate))
        }
        PayoffMethod::Custom => {
            if let Some(order) = custom_order {
                ordered = by_custom_order(debts, order);
            }
        }
    }
    ordered
}

/// Debts named in `order` come first, in that order. Unknown ids are
/// ignored and unmentioned debts follow in input order.
fn by_custom_order<'a>(debts: &'a [Debt], order: &[DebtId]) -> Vec<&'a Debt> {
    let mut placed = vec![false; debts.len()];
    let mut ordered = Vec::with_capacity(debts.len());

    for id in order {
        let found = debts
            .iter()
            .enumerate()
            .find(|(idx, debt)| !placed[*idx] && debt.id == *id);
        if let Some((idx, debt)) = found {
            placed[idx] = true;
            ordered.push(debt);
        }
    }

    ordered.extend(
        debts
            .iter()
            .zip(&placed)
            .filter(|(_, done)| !**done)
            .map(|(debt, _)| debt),
    );
    ordered
}
