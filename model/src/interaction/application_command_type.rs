use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ApplicationCommandType {
    ChatInput = 1,
    User = 2,
    Message = 3,
    PrimaryEntryPoint = 4,
}

impl TryFrom<u64> for ApplicationCommandType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            4 => Self::PrimaryEntryPoint,
            _ => {
                return Err(
                    format!("invalid application command type \"{}\"", value).into_boxed_str()
                )
            }
        })
    }
}
