use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// Emoji as used on buttons and select options: either a unicode emoji
/// (`name` only) or a custom emoji (`id` + `name`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PartialEmoji {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Box<str>>,
    #[serde(default)]
    pub animated: bool,
}

impl PartialEmoji {
    pub fn unicode(name: &str) -> PartialEmoji {
        PartialEmoji {
            id: None,
            name: Some(Box::from(name)),
            animated: false,
        }
    }
}

// Custom emojis compare by id, unicode emojis by name.
impl PartialEq for PartialEmoji {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name == other.name,
            _ => false,
        }
    }
}
