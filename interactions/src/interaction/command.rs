use super::{deref_base, InteractionBase};
use model::channel::message::Message;
use model::guild::Member;
use model::interaction::{
    ApplicationCommandInteractionDataOption, ApplicationCommandInteractionDataResolved,
    ApplicationCommandType,
};
use model::user::User;
use model::Snowflake;

#[derive(Debug, Clone)]
pub struct CommandInteraction {
    pub(crate) base: InteractionBase,
    pub command_id: Snowflake,
    pub command_name: Box<str>,
    pub kind: CommandKind,
}

#[derive(Debug, Clone)]
pub enum CommandKind {
    ChatInput {
        options: Vec<ApplicationCommandInteractionDataOption>,
        resolved: ApplicationCommandInteractionDataResolved,
    },
    UserContextMenu {
        target: User,
        target_member: Option<Member>,
    },
    MessageContextMenu {
        target: Message,
    },
    PrimaryEntryPoint,
}

impl CommandKind {
    pub fn command_type(&self) -> ApplicationCommandType {
        match self {
            CommandKind::ChatInput { .. } => ApplicationCommandType::ChatInput,
            CommandKind::UserContextMenu { .. } => ApplicationCommandType::User,
            CommandKind::MessageContextMenu { .. } => ApplicationCommandType::Message,
            CommandKind::PrimaryEntryPoint => ApplicationCommandType::PrimaryEntryPoint,
        }
    }
}

impl CommandInteraction {
    pub fn options(&self) -> &[ApplicationCommandInteractionDataOption] {
        match &self.kind {
            CommandKind::ChatInput { options, .. } => options,
            _ => &[],
        }
    }

    /// Entities referenced by user, role, channel, mentionable and
    /// attachment arguments.
    pub fn resolved(&self) -> Option<&ApplicationCommandInteractionDataResolved> {
        match &self.kind {
            CommandKind::ChatInput { resolved, .. } => Some(resolved),
            _ => None,
        }
    }
}

deref_base!(CommandInteraction);
