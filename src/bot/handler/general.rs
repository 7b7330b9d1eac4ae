use teloxide::{prelude::*, utils::command::BotCommands};

use crate::bot::dispatcher::{Command, HandlerResult};

use super::{
    constants::{COMMAND_BALANCE, COMMAND_HELP, COMMAND_MINE, COMMAND_TOP, CURRENCY_SYMBOL},
    utils::send_bot_message,
};

/* Invalid state.
 * This action is invoked when there is a non-command message addressed to the bot.
 * Currently, simply does not respond to anything. Reduces spam.
 */
pub async fn invalid_state(_bot: Bot, _msg: Message) -> HandlerResult {
    Ok(())
}

/* Start command.
 * Displays a welcome message to the user.
 */
pub async fn action_start(bot: Bot, msg: Message) -> HandlerResult {
    let introduction = format!("👋 Welcome, miner! Use {COMMAND_MINE} to dig up some {CURRENCY_SYMBOL}!\n⛏ You can mine once every hour.");
    let view_info = format!("💰 Check your {COMMAND_BALANCE} anytime, and see who's on {COMMAND_TOP}!");
    let closing = format!("🤗 Ask me for {COMMAND_HELP} if you get lost!");

    send_bot_message(
        &bot,
        &msg,
        format!("{introduction}\n\n{view_info}\n\n{closing}"),
    )
    .await?;
    Ok(())
}

/* Help command.
 * Displays a list of commands available to the user.
 */
pub async fn action_help(bot: Bot, msg: Message) -> HandlerResult {
    let commands = Command::descriptions().to_string();

    send_bot_message(&bot, &msg, format!("⭐️ My Commands ⭐️\n\n{commands}")).await?;
    Ok(())
}
