use super::{deref_base, InteractionBase};
use crate::Reply;
use model::interaction::{
    ApplicationCommandInteractionDataOption, ApplicationCommandOptionChoice, InteractionResponse,
};
use model::Snowflake;

#[derive(Debug, Clone)]
pub struct AutocompleteInteraction {
    pub(crate) base: InteractionBase,
    pub command_id: Snowflake,
    pub command_name: Box<str>,
    pub options: Vec<ApplicationCommandInteractionDataOption>,
}

impl AutocompleteInteraction {
    /// The option the user is currently typing into.
    pub fn focused_option(&self) -> Option<&ApplicationCommandInteractionDataOption> {
        self.options.iter().find(|option| option.focused)
    }

    /// The only reply an autocomplete interaction accepts. The platform shows
    /// at most 25 choices; extras are dropped here rather than rejected there.
    pub fn respond(&self, mut choices: Vec<ApplicationCommandOptionChoice>) -> Reply {
        choices.truncate(25);
        Reply::new(InteractionResponse::new_application_command_auto_complete_result_response(choices))
    }
}

deref_base!(AutocompleteInteraction);
