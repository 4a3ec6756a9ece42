pub mod depositor;
pub mod pool_state;
pub mod team_registry;

pub use depositor::*;
pub use pool_state::*;
pub use team_registry::*;
