use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::dispatcher::{Controller, HandlerResult};

use super::{
    constants::UNKNOWN_ERROR_MESSAGE,
    utils::{display_balance, get_sender, send_bot_message},
};

/* Balance command.
 * Shows the sender's balance, or invites them to start mining.
 */
pub async fn action_balance(bot: Bot, msg: Message, controller: Arc<Controller>) -> HandlerResult {
    let (sender_id, _) = get_sender(&msg)?;

    match controller.get_balance(&sender_id) {
        Ok(balance) => {
            send_bot_message(&bot, &msg, display_balance(balance)).await?;
            log::info!("Balance - User {} viewed their balance", sender_id);
        }
        Err(err) => {
            send_bot_message(&bot, &msg, UNKNOWN_ERROR_MESSAGE.to_string()).await?;
            log::error!(
                "Balance - User {} failed to view balance: {}",
                sender_id,
                err.to_string()
            );
        }
    }

    Ok(())
}
