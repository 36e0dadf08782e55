use crate::interaction::ApplicationCommandOptionType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteractionDataOption {
    pub name: Box<str>,
    pub r#type: ApplicationCommandOptionType,

    /// Raw value; shape depends on `type`. During autocomplete this is the
    /// partial user input and may not be valid for the declared type yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandInteractionDataOption>,

    #[serde(default)]
    pub focused: bool,
}
