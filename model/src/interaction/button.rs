use super::ComponentType;
use crate::guild::PartialEmoji;
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Button {
    pub r#type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<Box<str>>,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Box<str>>,
    #[serde(default = "bool::default")]
    pub disabled: bool,
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
    Link = 5,
    Premium = 6,
}

impl Button {
    /// An interactive button. `custom_id` should come from the custom id codec
    /// so the click routes back to a registered handler.
    pub fn new(style: ButtonStyle, custom_id: String) -> Button {
        Button {
            r#type: ComponentType::Button,
            label: None,
            custom_id: Some(custom_id.into_boxed_str()),
            style,
            emoji: None,
            sku_id: None,
            url: None,
            disabled: false,
        }
    }

    pub fn link(url: &str, label: &str) -> Button {
        Button {
            r#type: ComponentType::Button,
            label: Some(Box::from(label)),
            custom_id: None,
            style: ButtonStyle::Link,
            emoji: None,
            sku_id: None,
            url: Some(Box::from(url)),
            disabled: false,
        }
    }

    pub fn label(mut self, label: &str) -> Button {
        self.label = Some(Box::from(label));
        self
    }

    pub fn emoji(mut self, emoji: PartialEmoji) -> Button {
        self.emoji = Some(emoji);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Button {
        self.disabled = disabled;
        self
    }
}
