use serde::{Deserialize, Serialize};

use crate::user::User;
use crate::{PermissionBitSet, Snowflake};
use chrono::{DateTime, Utc};

/// Guild member as attached to interactions. `user` is present on the invoking
/// member and absent on members inside resolved data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub nick: Option<Box<str>>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: bool,
    /// Total permissions of the member in the interaction's channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
}
