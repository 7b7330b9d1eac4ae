// Exported functions
pub use self::balance::action_balance;
pub use self::general::{action_help, action_start, invalid_state};
pub use self::mine::action_mine;
pub use self::top::action_top;

// Submodules
mod balance;
mod constants;
mod general;
mod mine;
mod top;
mod utils;
