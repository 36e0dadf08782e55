mod channel;
pub use channel::PartialChannel;

mod channel_type;
pub use channel_type::ChannelType;

pub mod message;
