use super::ComponentType;
use crate::channel::ChannelType;
use crate::guild::PartialEmoji;
use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// Any of the five select menu kinds; `r#type` tells them apart. `options`
/// is only meaningful for string selects.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelectMenu {
    pub r#type: ComponentType,
    pub custom_id: Box<str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_values: Vec<SelectDefaultValue>,
    /// 0-25
    #[serde(default = "one")]
    pub min_values: u8,
    /// 1-25
    #[serde(default = "one")]
    pub max_values: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelectOption {
    pub label: Box<str>,
    pub value: Box<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(default)]
    pub default: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelectDefaultValue {
    pub id: Snowflake,
    pub r#type: SelectDefaultValueType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectDefaultValueType {
    User,
    Role,
    Channel,
}

impl SelectMenu {
    pub fn string(custom_id: &str, options: Vec<SelectOption>) -> SelectMenu {
        SelectMenu {
            r#type: ComponentType::StringSelect,
            custom_id: Box::from(custom_id),
            options,
            channel_types: Vec::new(),
            placeholder: None,
            default_values: Vec::new(),
            min_values: 1,
            max_values: 1,
            required: None,
            disabled: false,
        }
    }
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> SelectOption {
        SelectOption {
            label: Box::from(label),
            value: Box::from(value),
            description: None,
            emoji: None,
            default: false,
        }
    }
}

fn one() -> u8 {
    1
}
