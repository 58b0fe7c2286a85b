use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::usecases::remote::RemoteCommand;

#[derive(Debug, Parser)]
#[command(name = "chatdeck", about = "Terminal chat front end (TUI + REST commands)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Call the chat backend once and print the JSON result
    #[command(subcommand)]
    Remote(RemoteTarget),
}

#[derive(Debug, Clone, Subcommand)]
pub enum RemoteTarget {
    /// Chat resources
    #[command(subcommand)]
    Chats(ChatsAction),
    /// Message resources of one chat
    #[command(subcommand)]
    Messages(MessagesAction),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ChatsAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        /// Defaults to the configured user id
        #[arg(long)]
        created_by: Option<String>,
    },
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum MessagesAction {
    List(ChatArg),
    Send {
        #[command(flatten)]
        chat: ChatArg,
        #[arg(long)]
        text: String,
        /// Defaults to the configured user id
        #[arg(long)]
        sender: Option<String>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ChatArg {
    #[arg(long)]
    pub chat_id: String,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

impl RemoteTarget {
    /// Resolves omitted identities to `default_user`.
    pub fn into_command(self, default_user: &str) -> RemoteCommand {
        let or_default = |user: Option<String>| user.unwrap_or_else(|| default_user.to_owned());

        match self {
            RemoteTarget::Chats(ChatsAction::List) => RemoteCommand::ListChats,
            RemoteTarget::Chats(ChatsAction::Create { name, created_by }) => {
                RemoteCommand::CreateChat {
                    name,
                    created_by: or_default(created_by),
                }
            }
            RemoteTarget::Chats(ChatsAction::Delete { id }) => {
                RemoteCommand::DeleteChat { chat_id: id }
            }
            RemoteTarget::Messages(MessagesAction::List(ChatArg { chat_id })) => {
                RemoteCommand::ListMessages { chat_id }
            }
            RemoteTarget::Messages(MessagesAction::Send { chat, text, sender }) => {
                RemoteCommand::SendMessage {
                    chat_id: chat.chat_id,
                    text,
                    sender: or_default(sender),
                }
            }
        }
    }
}
