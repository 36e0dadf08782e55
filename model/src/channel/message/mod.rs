mod message;
pub use message::{Attachment, Message, PartialAttachment};

mod message_flags;
pub use message_flags::MessageFlags;

mod allowed_mentions;
pub use allowed_mentions::{AllowedMentionType, AllowedMentions};

pub mod embed;
pub use embed::Embed;
