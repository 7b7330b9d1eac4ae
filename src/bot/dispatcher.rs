use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands, RequestError};

use super::{
    config::Config,
    handler::{action_balance, action_help, action_mine, action_start, action_top, invalid_state},
    ledger::JsonFileStorage,
    processor::{ProcessError, RewardController},
};

/* Dispatcher wires the bot's commands to their handlers.
 * Handlers are the front-facing agents of the bot.
 * They receive commands from the user, and handle all user interaction,
 * including sending and crafting of messages.
 * They communicate only with the Processor, which executes the commands.
 * User exceptions are handled there. Processor may propagate some errors here.
 */

/* Types */
pub type Controller = RewardController<JsonFileStorage>;
pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("User error: {0}")]
    UserError(String),
    #[error("Process error: {0}")]
    ProcessError(ProcessError),
    #[error("Request error: {0}")]
    RequestError(RequestError),
}

impl From<RequestError> for BotError {
    fn from(request_error: RequestError) -> BotError {
        BotError::RequestError(request_error)
    }
}

impl From<ProcessError> for BotError {
    fn from(process_error: ProcessError) -> BotError {
        BotError::ProcessError(process_error)
    }
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the bot.")]
    Start,
    #[command(description = "Show this help message.")]
    Help,
    #[command(description = "Mine some $GOLD. Available once an hour.")]
    Mine,
    #[command(description = "Show your $GOLD balance.")]
    Balance,
    #[command(description = "Show the top 10 miners.")]
    Top,
}

/* Main Dispatch function */
pub async fn run_dispatcher(bot: Bot, config: Config) {
    use dptree::case;

    let controller: Arc<Controller> =
        Arc::new(RewardController::new(JsonFileStorage::new(config.ledger_file)));

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(action_start))
        .branch(case![Command::Help].endpoint(action_help))
        .branch(case![Command::Mine].endpoint(action_mine))
        .branch(case![Command::Balance].endpoint(action_balance))
        .branch(case![Command::Top].endpoint(action_top));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(dptree::endpoint(invalid_state));

    Dispatcher::builder(bot, message_handler)
        .dependencies(dptree::deps![controller])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("/mine", "goldminer_bot").unwrap(),
            Command::Mine
        );
        assert_eq!(
            Command::parse("/balance@goldminer_bot", "goldminer_bot").unwrap(),
            Command::Balance
        );
        assert_eq!(
            Command::parse("/top", "goldminer_bot").unwrap(),
            Command::Top
        );
        assert!(Command::parse("/dig", "goldminer_bot").is_err());
    }

    #[test]
    fn test_command_descriptions() {
        let descriptions = Command::descriptions().to_string();
        for command in ["/start", "/help", "/mine", "/balance", "/top"] {
            assert!(descriptions.contains(command));
        }
    }
}
