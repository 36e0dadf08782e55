/// Bit values for the `flags` field of messages and interaction callback data.
pub struct MessageFlags;

impl MessageFlags {
    pub const CROSSPOSTED: u64 = 1 << 0;
    pub const SUPPRESS_EMBEDS: u64 = 1 << 2;
    pub const EPHEMERAL: u64 = 1 << 6;
    pub const LOADING: u64 = 1 << 7;
    pub const SUPPRESS_NOTIFICATIONS: u64 = 1 << 12;
    pub const IS_COMPONENTS_V2: u64 = 1 << 15;

    pub fn is_ephemeral(flags: u64) -> bool {
        flags & Self::EPHEMERAL == Self::EPHEMERAL
    }
}
