use super::ComponentType;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::convert::TryFrom;

/// A component as echoed back in a modal submission. Only the interactive
/// leaves carry values; rows, labels and text displays are structure.
#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum ModalSubmitComponent {
    ActionRow(ModalSubmitActionRow),
    Label(ModalSubmitLabel),
    TextInput(ModalSubmitTextInput),
    Select(ModalSubmitSelect),
    TextDisplay(ModalSubmitTextDisplay),
    Other(Value),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitActionRow {
    pub r#type: ComponentType,
    #[serde(default)]
    pub components: Vec<ModalSubmitComponent>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitLabel {
    pub r#type: ComponentType,
    pub component: Box<ModalSubmitComponent>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitTextInput {
    pub r#type: ComponentType,
    pub custom_id: Box<str>,
    #[serde(default)]
    pub value: Box<str>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitSelect {
    pub r#type: ComponentType,
    pub custom_id: Box<str>,
    #[serde(default)]
    pub values: Vec<Box<str>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalSubmitTextDisplay {
    pub r#type: ComponentType,
}

impl<'de> Deserialize<'de> for ModalSubmitComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let component_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| D::Error::custom("component type was not an integer"))?;

        let component_type = match ComponentType::try_from(component_type) {
            Ok(t) => t,
            Err(_) => return Ok(ModalSubmitComponent::Other(value)),
        };

        let component = match component_type {
            ComponentType::ActionRow => {
                serde_json::from_value(value).map(ModalSubmitComponent::ActionRow)
            }
            ComponentType::Label => serde_json::from_value(value).map(ModalSubmitComponent::Label),
            ComponentType::TextInput => {
                serde_json::from_value(value).map(ModalSubmitComponent::TextInput)
            }
            t if t.is_select() => serde_json::from_value(value).map(ModalSubmitComponent::Select),
            ComponentType::TextDisplay => {
                serde_json::from_value(value).map(ModalSubmitComponent::TextDisplay)
            }
            _ => Ok(ModalSubmitComponent::Other(value)),
        }
        .map_err(D::Error::custom)?;

        Ok(component)
    }
}
