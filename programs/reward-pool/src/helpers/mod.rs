pub mod cpi;
pub mod ledger;
pub mod math;
