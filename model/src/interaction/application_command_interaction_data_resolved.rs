use crate::channel::message::{Attachment, Message};
use crate::channel::PartialChannel;
use crate::guild::{Member, Role};
use crate::user::User;
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entities referenced by id elsewhere in the payload, sent inline.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApplicationCommandInteractionDataResolved {
    #[serde(default)]
    pub users: HashMap<Snowflake, User>,
    #[serde(default)]
    pub members: HashMap<Snowflake, Member>,
    #[serde(default)]
    pub roles: HashMap<Snowflake, Role>,
    #[serde(default)]
    pub channels: HashMap<Snowflake, PartialChannel>,
    #[serde(default)]
    pub messages: HashMap<Snowflake, Message>,
    #[serde(default)]
    pub attachments: HashMap<Snowflake, Attachment>,
}
