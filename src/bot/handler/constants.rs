/* Commands */
pub const COMMAND_HELP: &str = "/help";
pub const COMMAND_MINE: &str = "/mine";
pub const COMMAND_BALANCE: &str = "/balance";
pub const COMMAND_TOP: &str = "/top";

/* Display */
pub const CURRENCY_SYMBOL: &str = "$GOLD";
pub const UNNAMED_USER: &str = "Unnamed";

/* Messages */
pub const UNKNOWN_ERROR_MESSAGE: &str =
    "❓ Hmm, something went wrong! Sorry, I can't do that right now, please try again later!";
pub const NO_ACCOUNTS_MESSAGE: &str = "📭 No miners yet! Be the first to dig some gold!";
