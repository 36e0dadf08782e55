use super::{Component, ComponentType};
use serde::{Deserialize, Serialize};

/// Top-level modal component wrapping exactly one input with a label.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Label {
    pub r#type: ComponentType,
    pub label: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
    pub component: Box<Component>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TextDisplay {
    pub r#type: ComponentType,
    pub content: Box<str>,
}

impl Label {
    pub fn new(label: &str, component: impl Into<Component>) -> Label {
        Label {
            r#type: ComponentType::Label,
            label: Box::from(label),
            description: None,
            component: Box::new(component.into()),
        }
    }
}

impl TextDisplay {
    pub fn new(content: &str) -> TextDisplay {
        TextDisplay {
            r#type: ComponentType::TextDisplay,
            content: Box::from(content),
        }
    }
}
