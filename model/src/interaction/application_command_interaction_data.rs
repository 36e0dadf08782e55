use crate::interaction::{
    ApplicationCommandInteractionDataOption, ApplicationCommandInteractionDataResolved,
    ApplicationCommandType,
};
use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// `data` of both application command and autocomplete interactions.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteractionData {
    pub id: Snowflake,
    pub name: Box<str>,
    pub r#type: ApplicationCommandType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandInteractionDataOption>,
    #[serde(default)]
    pub resolved: ApplicationCommandInteractionDataResolved,
    /// Target user or message of a context menu command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<Snowflake>,
}
