use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

impl ApplicationCommandOptionType {
    /// Subcommands and groups only carry nested options, never a value.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }

    /// Option types the platform sends autocomplete requests for.
    pub fn supports_autocomplete(&self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Number)
    }
}

impl fmt::Display for ApplicationCommandOptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
