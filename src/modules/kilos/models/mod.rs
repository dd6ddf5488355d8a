pub mod order;
pub mod report;

pub use order::{BranchRef, PosOrder, KILOS_FIELD};
pub use report::{MonthlyKilos, OrderKilos};
