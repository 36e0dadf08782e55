use super::{ActionRow, Button, Label, SelectMenu, TextDisplay, TextInput};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
    TextInput(TextInput),
    TextDisplay(TextDisplay),
    Label(Label),
    /// Layout components this crate never builds; kept verbatim so messages
    /// containing them still deserialize.
    Other(Value),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    StringSelect = 3,
    TextInput = 4,
    UserSelect = 5,
    RoleSelect = 6,
    MentionableSelect = 7,
    ChannelSelect = 8,
    Section = 9,
    TextDisplay = 10,
    Thumbnail = 11,
    MediaGallery = 12,
    File = 13,
    Separator = 14,
    Container = 17,
    Label = 18,
    FileUpload = 19,
}

impl ComponentType {
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            Self::StringSelect
                | Self::UserSelect
                | Self::RoleSelect
                | Self::MentionableSelect
                | Self::ChannelSelect
        )
    }
}

impl TryFrom<u64> for ComponentType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 => Self::StringSelect,
            4 => Self::TextInput,
            5 => Self::UserSelect,
            6 => Self::RoleSelect,
            7 => Self::MentionableSelect,
            8 => Self::ChannelSelect,
            9 => Self::Section,
            10 => Self::TextDisplay,
            11 => Self::Thumbnail,
            12 => Self::MediaGallery,
            13 => Self::File,
            14 => Self::Separator,
            17 => Self::Container,
            18 => Self::Label,
            19 => Self::FileUpload,
            _ => Err(format!("invalid component type \"{}\"", value).into_boxed_str())?,
        })
    }
}

impl From<ActionRow> for Component {
    fn from(row: ActionRow) -> Self {
        Component::ActionRow(row)
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

impl From<SelectMenu> for Component {
    fn from(menu: SelectMenu) -> Self {
        Component::SelectMenu(menu)
    }
}

impl From<TextInput> for Component {
    fn from(input: TextInput) -> Self {
        Component::TextInput(input)
    }
}

impl From<TextDisplay> for Component {
    fn from(display: TextDisplay) -> Self {
        Component::TextDisplay(display)
    }
}

impl From<Label> for Component {
    fn from(label: Label) -> Self {
        Component::Label(label)
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let component_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| D::Error::custom("component type was not an integer"))?;

        let component_type = match ComponentType::try_from(component_type) {
            Ok(t) => t,
            Err(_) => return Ok(Component::Other(value)),
        };

        let component = match component_type {
            ComponentType::ActionRow => serde_json::from_value(value).map(Component::ActionRow),
            ComponentType::Button => serde_json::from_value(value).map(Component::Button),
            t if t.is_select() => serde_json::from_value(value).map(Component::SelectMenu),
            ComponentType::TextInput => serde_json::from_value(value).map(Component::TextInput),
            ComponentType::TextDisplay => {
                serde_json::from_value(value).map(Component::TextDisplay)
            }
            ComponentType::Label => serde_json::from_value(value).map(Component::Label),
            _ => Ok(Component::Other(value)),
        }
        .map_err(D::Error::custom)?;

        Ok(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ButtonStyle;

    #[test]
    fn test_deserialize_nested_row() {
        let json = r#"{"type":1,"components":[{"type":2,"style":1,"custom_id":"\u0007abc","label":"Go"}]}"#;
        let component: Component = serde_json::from_str(json).unwrap();

        let row = match component {
            Component::ActionRow(row) => row,
            other => panic!("expected action row, got {:?}", other),
        };

        match &row.components[0] {
            Component::Button(button) => {
                assert_eq!(button.custom_id.as_deref(), Some("\u{7}abc"));
                assert!(matches!(button.style, ButtonStyle::Primary));
            }
            other => panic!("expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_component_is_preserved() {
        let component: Component = serde_json::from_str(r#"{"type":99,"foo":1}"#).unwrap();
        assert!(matches!(component, Component::Other(_)));
    }
}
