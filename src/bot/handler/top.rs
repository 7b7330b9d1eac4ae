use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::{
    dispatcher::{Controller, HandlerResult},
    processor::LEADERBOARD_LIMIT,
};

use super::{
    constants::UNKNOWN_ERROR_MESSAGE,
    utils::{display_leaderboard, send_bot_message},
};

/* Top command.
 * Shows the richest miners.
 */
pub async fn action_top(bot: Bot, msg: Message, controller: Arc<Controller>) -> HandlerResult {
    let chat_id = msg.chat.id.to_string();

    match controller.get_leaderboard(LEADERBOARD_LIMIT) {
        Ok(entries) => {
            send_bot_message(&bot, &msg, display_leaderboard(&entries)).await?;
            log::info!(
                "Top - Leaderboard of {} entries shown in chat {}",
                entries.len(),
                chat_id
            );
        }
        Err(err) => {
            send_bot_message(&bot, &msg, UNKNOWN_ERROR_MESSAGE.to_string()).await?;
            log::error!(
                "Top - Failed to show leaderboard in chat {}: {}",
                chat_id,
                err.to_string()
            );
        }
    }

    Ok(())
}
