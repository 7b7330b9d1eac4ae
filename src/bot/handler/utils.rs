use teloxide::{payloads::SendMessage, prelude::*, requests::JsonRequest};

use crate::bot::{
    dispatcher::BotError,
    ledger::LeaderboardEntry,
    processor::{ClaimOutcome, REWARD_AMOUNT},
};

use super::constants::{COMMAND_MINE, CURRENCY_SYMBOL, NO_ACCOUNTS_MESSAGE, UNNAMED_USER};

/* Common utilites for handlers. */

// Replies to the message that triggered the command.
pub fn send_bot_message(bot: &Bot, msg: &Message, text: String) -> JsonRequest<SendMessage> {
    bot.send_message(msg.chat.id, text)
        .reply_to_message_id(msg.id)
}

/* Identifies the sender of a message.
 * Returns the user id and the name to display: username if set, else first name.
 * Service messages have no sender.
 */
pub fn get_sender(msg: &Message) -> Result<(String, String), BotError> {
    match msg.from() {
        Some(user) => {
            let display_name = match &user.username {
                Some(username) => username.clone(),
                None => user.first_name.clone(),
            };
            Ok((user.id.to_string(), display_name))
        }
        None => Err(BotError::UserError(
            "Message has no sender.".to_string(),
        )),
    }
}

pub fn display_username(display_name: &str) -> &str {
    if display_name.trim().is_empty() {
        UNNAMED_USER
    } else {
        display_name
    }
}

pub fn display_claim(display_name: &str, outcome: &ClaimOutcome) -> String {
    match outcome {
        ClaimOutcome::Granted { balance } => format!(
            "✅ {}, you mined {REWARD_AMOUNT} {CURRENCY_SYMBOL}!\n💰 Your balance is now {balance} {CURRENCY_SYMBOL}.",
            display_username(display_name)
        ),
        ClaimOutcome::Denied { .. } => {
            let (minutes, seconds) = outcome.remaining_parts().unwrap_or_default();
            format!("⏳ Your pickaxe needs a rest! You can mine again in {minutes} minutes {seconds} seconds.")
        }
    }
}

pub fn display_balance(balance: Option<u64>) -> String {
    match balance {
        Some(balance) => format!("💰 Your balance: {balance} {CURRENCY_SYMBOL}"),
        None => format!("You don't have any {CURRENCY_SYMBOL} yet. Use {COMMAND_MINE} to get started!"),
    }
}

pub fn display_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return NO_ACCOUNTS_MESSAGE.to_string();
    }

    let mut message = format!("🏆 Top {} miners by balance:\n\n", entries.len());
    for entry in entries {
        message.push_str(&format!(
            "{}. {}: {} {CURRENCY_SYMBOL}\n",
            entry.rank,
            display_username(&entry.display_name),
            entry.balance
        ));
    }

    message
}

// Tests
#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_display_claim_granted() {
        let text = display_claim("miner", &ClaimOutcome::Granted { balance: 2000 });
        assert!(text.contains("miner, you mined 1000 $GOLD!"));
        assert!(text.contains("balance is now 2000 $GOLD"));
    }

    #[test]
    fn test_display_claim_denied() {
        let outcome = ClaimOutcome::Denied {
            remaining: Duration::minutes(29) + Duration::seconds(5),
        };
        let text = display_claim("miner", &outcome);
        assert!(text.contains("29 minutes 5 seconds"));
    }

    #[test]
    fn test_display_balance() {
        assert_eq!(display_balance(Some(3000)), "💰 Your balance: 3000 $GOLD");
        assert!(display_balance(None).contains("/mine"));
    }

    #[test]
    fn test_display_leaderboard() {
        let entries = vec![
            LeaderboardEntry {
                rank: 1,
                user_id: "4".to_string(),
                display_name: "dave".to_string(),
                balance: 5000,
            },
            LeaderboardEntry {
                rank: 2,
                user_id: "2".to_string(),
                display_name: "".to_string(),
                balance: 2000,
            },
        ];
        let text = display_leaderboard(&entries);
        assert!(text.contains("1. dave: 5000 $GOLD\n"));
        assert!(text.contains("2. Unnamed: 2000 $GOLD\n"));
    }

    #[test]
    fn test_display_leaderboard_empty() {
        assert_eq!(display_leaderboard(&[]), NO_ACCOUNTS_MESSAGE);
    }
}
