use crate::channel::message::embed::Embed;
use crate::channel::message::{AllowedMentions, MessageFlags, PartialAttachment};
use crate::interaction::{ApplicationCommandOptionChoice, Component};
use serde::{Deserialize, Serialize};

/// Message payload of replies, updates, follow-ups and edits.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct InteractionCallbackData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<PartialAttachment>,
}

impl InteractionCallbackData {
    pub fn new() -> InteractionCallbackData {
        InteractionCallbackData::default()
    }

    pub fn content(mut self, content: impl Into<Box<str>>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    pub fn allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or(0) | MessageFlags::EPHEMERAL);
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags.map(MessageFlags::is_ephemeral).unwrap_or(false)
    }
}

impl From<&str> for InteractionCallbackData {
    fn from(content: &str) -> Self {
        InteractionCallbackData::new().content(content)
    }
}

impl From<String> for InteractionCallbackData {
    fn from(content: String) -> Self {
        InteractionCallbackData::new().content(content)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModalCallbackData {
    pub custom_id: Box<str>,
    pub title: Box<str>,
    pub components: Vec<Component>,
}

impl ModalCallbackData {
    pub fn new(custom_id: impl Into<Box<str>>, title: impl Into<Box<str>>) -> Self {
        ModalCallbackData {
            custom_id: custom_id.into(),
            title: title.into(),
            components: Vec::new(),
        }
    }

    pub fn component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AutocompleteCallbackData {
    pub choices: Vec<ApplicationCommandOptionChoice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DeferredCallbackData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}
