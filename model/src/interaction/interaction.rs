use crate::channel::message::Message;
use crate::channel::PartialChannel;
use crate::guild::Member;
use crate::interaction::{
    ApplicationCommandInteractionData, ApplicationCommandInteractionDataResolved, ComponentType,
    ModalSubmitComponent,
};
use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
    MessageComponent(Box<MessageComponentInteraction>),
    ApplicationCommandAutoComplete(Box<ApplicationCommandAutoCompleteInteraction>),
    ModalSubmit(Box<ModalSubmitInteraction>),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

/// Fields common to every interaction kind.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InteractionMetadata {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub r#type: InteractionType,
    #[serde(default)]
    pub token: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<PartialChannel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    /// Present when invoked in a guild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    /// Present when invoked in a DM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default = "default_version")]
    pub version: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_permissions: Option<PermissionBitSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_locale: Option<Box<str>>,
}

impl InteractionMetadata {
    /// The user behind the interaction, whether it came from a guild or a DM.
    pub fn invoking_user(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }

    pub fn channel_id(&self) -> Option<Snowflake> {
        self.channel_id
            .or_else(|| self.channel.as_ref().map(|channel| channel.id))
    }
}

fn default_version() -> u8 {
    1
}

// ============================================================================
// Ping Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PingInteraction {
    #[serde(flatten)]
    pub metadata: InteractionMetadata,
}

// ============================================================================
// Application Command Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandInteraction {
    #[serde(flatten)]
    pub metadata: InteractionMetadata,
    pub data: ApplicationCommandInteractionData,
}

// ============================================================================
// Message Component Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageComponentInteraction {
    #[serde(flatten)]
    pub metadata: InteractionMetadata,
    pub message: Message,
    pub data: MessageComponentInteractionData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageComponentInteractionData {
    pub custom_id: Box<str>,
    pub component_type: ComponentType,
    /// Selected values; empty for buttons.
    #[serde(default)]
    pub values: Vec<Box<str>>,
    /// Users, roles, channels and members picked in an auto-populated select.
    #[serde(default)]
    pub resolved: ApplicationCommandInteractionDataResolved,
}

// ============================================================================
// Auto Complete Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandAutoCompleteInteraction {
    #[serde(flatten)]
    pub metadata: InteractionMetadata,
    pub data: ApplicationCommandInteractionData,
}

// ============================================================================
// Modal Submit Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitInteraction {
    #[serde(flatten)]
    pub metadata: InteractionMetadata,
    /// Only set when the modal was opened from a message component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    pub data: ModalSubmitInteractionData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitInteractionData {
    pub custom_id: Box<str>,
    #[serde(default)]
    pub components: Vec<ModalSubmitComponent>,
    #[serde(default)]
    pub resolved: ApplicationCommandInteractionDataResolved,
}

impl Interaction {
    pub fn metadata(&self) -> &InteractionMetadata {
        match self {
            Interaction::Ping(i) => &i.metadata,
            Interaction::ApplicationCommand(i) => &i.metadata,
            Interaction::MessageComponent(i) => &i.metadata,
            Interaction::ApplicationCommandAutoComplete(i) => &i.metadata,
            Interaction::ModalSubmit(i) => &i.metadata,
        }
    }

    pub fn interaction_type(&self) -> InteractionType {
        self.metadata().r#type
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction type was not an integer"))
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::ApplicationCommand => {
                serde_json::from_value(value).map(Interaction::ApplicationCommand)
            }
            InteractionType::MessageComponent => {
                serde_json::from_value(value).map(Interaction::MessageComponent)
            }
            InteractionType::ApplicationCommandAutoComplete => {
                serde_json::from_value(value).map(Interaction::ApplicationCommandAutoComplete)
            }
            InteractionType::ModalSubmit => {
                serde_json::from_value(value).map(Interaction::ModalSubmit)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ApplicationCommandType;

    const CHAT_INPUT: &str = r#"{
        "id": "1100000000000000001",
        "application_id": "1100000000000000002",
        "type": 2,
        "token": "tok",
        "guild_id": "1100000000000000003",
        "channel": {"id": "1100000000000000004", "type": 0},
        "member": {
            "user": {"id": "1100000000000000005", "username": "alice"},
            "roles": [],
            "permissions": "2048"
        },
        "version": 1,
        "app_permissions": "8",
        "locale": "en-GB",
        "data": {
            "id": "1100000000000000006",
            "name": "echo",
            "type": 1,
            "options": [{"name": "text", "type": 3, "value": "hi"}]
        }
    }"#;

    #[test]
    fn test_deserialize_chat_input() {
        let interaction: Interaction = serde_json::from_str(CHAT_INPUT).unwrap();

        let command = match &interaction {
            Interaction::ApplicationCommand(command) => command,
            other => panic!("expected application command, got {:?}", other),
        };

        assert_eq!(command.data.r#type, ApplicationCommandType::ChatInput);
        assert_eq!(&*command.data.name, "echo");
        assert_eq!(command.data.options.len(), 1);

        let metadata = interaction.metadata();
        assert_eq!(
            metadata.invoking_user().map(|u| u.id),
            Some(Snowflake(1100000000000000005))
        );
        assert_eq!(metadata.channel_id(), Some(Snowflake(1100000000000000004)));
        assert_eq!(metadata.locale.as_deref(), Some("en-GB"));
    }

    #[test]
    fn test_dm_user_is_invoking_user() {
        let json = r#"{
            "id": "1", "application_id": "2", "type": 1, "token": "t",
            "user": {"id": "77", "username": "bob"}
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();

        assert!(matches!(interaction, Interaction::Ping(_)));
        assert_eq!(
            interaction.metadata().invoking_user().map(|u| u.id),
            Some(Snowflake(77))
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"id": "1", "application_id": "2", "type": 42, "token": "t"}"#;
        assert!(serde_json::from_str::<Interaction>(json).is_err());
    }
}
