pub mod amount;
pub mod book;
pub mod csv;
pub mod engine;
pub mod model;
pub mod summary;

pub use amount::Amount;
pub use book::DebtBook;
pub use engine::{MAX_MONTHS, Simulation, calculate_payoff_schedule};
pub use model::{Debt, DebtId, DebtType, PayoffMethod, PayoffPlan, PayoffSchedule, PayoffStep};
pub use summary::{DebtSummary, debt_summary, income_share};
