use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::{
    dispatcher::{Controller, HandlerResult},
    processor::{current_time, ClaimOutcome},
};

use super::{
    constants::UNKNOWN_ERROR_MESSAGE,
    utils::{display_claim, get_sender, send_bot_message},
};

/* Mine command.
 * Claims the hourly reward for the sender, or tells them how long to wait.
 */
pub async fn action_mine(bot: Bot, msg: Message, controller: Arc<Controller>) -> HandlerResult {
    let (sender_id, display_name) = get_sender(&msg)?;
    let now = current_time();

    match controller.claim_reward(&sender_id, &display_name, now) {
        Ok(outcome) => {
            send_bot_message(&bot, &msg, display_claim(&display_name, &outcome)).await?;
            match outcome {
                ClaimOutcome::Granted { balance } => log::info!(
                    "Mine - User {} mined successfully, balance now {}",
                    sender_id,
                    balance
                ),
                ClaimOutcome::Denied { remaining } => log::info!(
                    "Mine - User {} is cooling down, {} seconds remaining",
                    sender_id,
                    remaining.num_seconds()
                ),
            }
        }
        Err(err) => {
            send_bot_message(&bot, &msg, UNKNOWN_ERROR_MESSAGE.to_string()).await?;
            log::error!(
                "Mine - User {} failed to mine: {}",
                sender_id,
                err.to_string()
            );
        }
    }

    Ok(())
}
