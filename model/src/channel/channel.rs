use serde::{Deserialize, Serialize};

use super::ChannelType;
use crate::{PermissionBitSet, Snowflake};

/// The channel shape embedded in interaction payloads and in resolved data.
/// Only a subset of the full channel object is ever sent there.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PartialChannel {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Box<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Snowflake>,
    /// Computed permissions of the invoking member in this channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionBitSet>,
}
