use super::{deref_base, InteractionBase};
use model::channel::message::Message;
use model::channel::PartialChannel;
use model::guild::{Member, Role};
use model::interaction::ComponentType;
use model::user::User;
use model::Snowflake;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ComponentInteraction {
    pub(crate) base: InteractionBase,
    pub custom_id: Box<str>,
    /// The message the component is attached to.
    pub message: Message,
    pub kind: ComponentKind,
}

/// Auto-populated selects carry their picks resolved, in the order the
/// platform sent the ids.
#[derive(Debug, Clone)]
pub enum ComponentKind {
    Button,
    StringSelect {
        values: Vec<String>,
    },
    UserSelect {
        users: Vec<User>,
        members: HashMap<Snowflake, Member>,
    },
    RoleSelect {
        roles: Vec<Role>,
    },
    ChannelSelect {
        channels: Vec<PartialChannel>,
    },
    MentionableSelect {
        users: Vec<User>,
        roles: Vec<Role>,
    },
}

impl ComponentKind {
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentKind::Button => ComponentType::Button,
            ComponentKind::StringSelect { .. } => ComponentType::StringSelect,
            ComponentKind::UserSelect { .. } => ComponentType::UserSelect,
            ComponentKind::RoleSelect { .. } => ComponentType::RoleSelect,
            ComponentKind::ChannelSelect { .. } => ComponentType::ChannelSelect,
            ComponentKind::MentionableSelect { .. } => ComponentType::MentionableSelect,
        }
    }
}

deref_base!(ComponentInteraction);
