use serde::{Deserialize, Serialize};

use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: Snowflake,
    pub username: Box<str>,
    /// "0" for accounts migrated to unique usernames.
    #[serde(default = "default_discriminator")]
    pub discriminator: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<Box<str>>,
    #[serde(default)]
    pub avatar: Option<Box<str>>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

fn default_discriminator() -> Box<str> {
    Box::from("0")
}
