use super::ComponentType;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TextInput {
    pub r#type: ComponentType,
    pub custom_id: Box<str>,
    pub style: TextStyleType,
    /// Only used when the input sits in a legacy action row; inside a label
    /// the label carries the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Box<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<str>>,
}

#[derive(Copy, Clone, Debug, Deserialize_repr, Serialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum TextStyleType {
    Short = 1,
    Paragraph = 2,
}

impl TextInput {
    pub fn new(custom_id: &str, style: TextStyleType) -> TextInput {
        TextInput {
            r#type: ComponentType::TextInput,
            custom_id: Box::from(custom_id),
            style,
            label: None,
            placeholder: None,
            min_length: None,
            max_length: None,
            required: Some(false),
            value: None,
        }
    }
}
