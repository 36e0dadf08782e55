use crate::interaction::{
    ApplicationCommandOptionChoice, AutocompleteCallbackData, DeferredCallbackData,
    InteractionCallbackData, ModalCallbackData,
};
use crate::channel::message::MessageFlags;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum InteractionResponse {
    PongResponse(SimpleInteractionResponse),
    ChannelMessageWithSource(MessageResponse),
    DeferredChannelMessageWithSource(DeferredResponse),
    DeferredMessageUpdate(SimpleInteractionResponse),
    UpdateMessage(MessageResponse),
    ApplicationCommandAutoCompleteResult(AutocompleteResponse),
    Modal(ModalResponse),
    LaunchActivity(SimpleInteractionResponse),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimpleInteractionResponse {
    pub r#type: InteractionResponseType,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub r#type: InteractionResponseType,
    pub data: InteractionCallbackData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeferredResponse {
    pub r#type: InteractionResponseType,
    #[serde(default)]
    pub data: DeferredCallbackData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AutocompleteResponse {
    pub r#type: InteractionResponseType,
    pub data: AutocompleteCallbackData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalResponse {
    pub r#type: InteractionResponseType,
    pub data: ModalCallbackData,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[non_exhaustive]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredMessageUpdate = 6,
    UpdateMessage = 7,
    ApplicationCommandAutoCompleteResult = 8,
    Modal = 9,
    LaunchActivity = 12,
}

impl TryFrom<u64> for InteractionResponseType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Pong,
            4 => Self::ChannelMessageWithSource,
            5 => Self::DeferredChannelMessageWithSource,
            6 => Self::DeferredMessageUpdate,
            7 => Self::UpdateMessage,
            8 => Self::ApplicationCommandAutoCompleteResult,
            9 => Self::Modal,
            12 => Self::LaunchActivity,
            _ => {
                return Err(
                    format!("invalid interaction response type \"{}\"", value).into_boxed_str()
                )
            }
        })
    }
}

impl InteractionResponse {
    pub fn new_pong() -> InteractionResponse {
        InteractionResponse::PongResponse(SimpleInteractionResponse {
            r#type: InteractionResponseType::Pong,
        })
    }

    pub fn new_channel_message_with_source(data: InteractionCallbackData) -> InteractionResponse {
        InteractionResponse::ChannelMessageWithSource(MessageResponse {
            r#type: InteractionResponseType::ChannelMessageWithSource,
            data,
        })
    }

    pub fn new_deferred_message_with_source(ephemeral: bool) -> InteractionResponse {
        InteractionResponse::DeferredChannelMessageWithSource(DeferredResponse {
            r#type: InteractionResponseType::DeferredChannelMessageWithSource,
            data: DeferredCallbackData {
                flags: ephemeral.then_some(MessageFlags::EPHEMERAL),
            },
        })
    }

    pub fn new_deferred_message_update() -> InteractionResponse {
        InteractionResponse::DeferredMessageUpdate(SimpleInteractionResponse {
            r#type: InteractionResponseType::DeferredMessageUpdate,
        })
    }

    pub fn new_update_message(data: InteractionCallbackData) -> InteractionResponse {
        InteractionResponse::UpdateMessage(MessageResponse {
            r#type: InteractionResponseType::UpdateMessage,
            data,
        })
    }

    pub fn new_application_command_auto_complete_result_response(
        choices: Vec<ApplicationCommandOptionChoice>,
    ) -> InteractionResponse {
        InteractionResponse::ApplicationCommandAutoCompleteResult(AutocompleteResponse {
            r#type: InteractionResponseType::ApplicationCommandAutoCompleteResult,
            data: AutocompleteCallbackData { choices },
        })
    }

    pub fn new_modal(data: ModalCallbackData) -> InteractionResponse {
        InteractionResponse::Modal(ModalResponse {
            r#type: InteractionResponseType::Modal,
            data,
        })
    }

    pub fn new_launch_activity() -> InteractionResponse {
        InteractionResponse::LaunchActivity(SimpleInteractionResponse {
            r#type: InteractionResponseType::LaunchActivity,
        })
    }

    pub fn response_type(&self) -> InteractionResponseType {
        match self {
            InteractionResponse::PongResponse(r)
            | InteractionResponse::DeferredMessageUpdate(r)
            | InteractionResponse::LaunchActivity(r) => r.r#type,
            InteractionResponse::ChannelMessageWithSource(r)
            | InteractionResponse::UpdateMessage(r) => r.r#type,
            InteractionResponse::DeferredChannelMessageWithSource(r) => r.r#type,
            InteractionResponse::ApplicationCommandAutoCompleteResult(r) => r.r#type,
            InteractionResponse::Modal(r) => r.r#type,
        }
    }

    /// Message payload for the variants that carry one.
    pub fn message_data_mut(&mut self) -> Option<&mut InteractionCallbackData> {
        match self {
            InteractionResponse::ChannelMessageWithSource(r)
            | InteractionResponse::UpdateMessage(r) => Some(&mut r.data),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for InteractionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let response_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction response type was not an integer"))
            .and_then(InteractionResponseType::try_from)
            .map_err(D::Error::custom)?;

        let response = match response_type {
            InteractionResponseType::Pong => {
                serde_json::from_value(value).map(InteractionResponse::PongResponse)
            }
            InteractionResponseType::ChannelMessageWithSource => {
                serde_json::from_value(value).map(InteractionResponse::ChannelMessageWithSource)
            }
            InteractionResponseType::DeferredChannelMessageWithSource => {
                serde_json::from_value(value)
                    .map(InteractionResponse::DeferredChannelMessageWithSource)
            }
            InteractionResponseType::DeferredMessageUpdate => {
                serde_json::from_value(value).map(InteractionResponse::DeferredMessageUpdate)
            }
            InteractionResponseType::UpdateMessage => {
                serde_json::from_value(value).map(InteractionResponse::UpdateMessage)
            }
            InteractionResponseType::ApplicationCommandAutoCompleteResult => {
                serde_json::from_value(value)
                    .map(InteractionResponse::ApplicationCommandAutoCompleteResult)
            }
            InteractionResponseType::Modal => {
                serde_json::from_value(value).map(InteractionResponse::Modal)
            }
            InteractionResponseType::LaunchActivity => {
                serde_json::from_value(value).map(InteractionResponse::LaunchActivity)
            }
        }
        .map_err(D::Error::custom)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pong_shape() {
        let json = serde_json::to_value(InteractionResponse::new_pong()).unwrap();
        assert_eq!(json, json!({"type": 1}));
    }

    #[test]
    fn test_deferred_flags() {
        let ephemeral = serde_json::to_value(
            InteractionResponse::new_deferred_message_with_source(true),
        )
        .unwrap();
        assert_eq!(ephemeral, json!({"type": 5, "data": {"flags": 64}}));

        let public = serde_json::to_value(
            InteractionResponse::new_deferred_message_with_source(false),
        )
        .unwrap();
        assert_eq!(public, json!({"type": 5, "data": {}}));
    }

    #[test]
    fn test_deserialize_update_message() {
        let response: InteractionResponse =
            serde_json::from_str(r#"{"type":7,"data":{"content":"edited"}}"#).unwrap();

        assert_eq!(response.response_type(), InteractionResponseType::UpdateMessage);
        match response {
            InteractionResponse::UpdateMessage(r) => {
                assert_eq!(r.data.content.as_deref(), Some("edited"))
            }
            other => panic!("expected update, got {:?}", other),
        }
    }
}
