mod role;
pub use role::Role;

mod emoji;
pub use emoji::PartialEmoji;

mod member;
pub use member::Member;
