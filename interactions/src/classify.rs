use crate::interaction::{
    AutocompleteInteraction, CommandInteraction, CommandKind, ComponentInteraction,
    ComponentKind, Interaction, InteractionBase, InteractionKind, ModalSubmitInteraction,
};
use crate::rest::InteractionApi;
use model::interaction::{
    ApplicationCommandAutoCompleteInteraction, ApplicationCommandInteraction,
    ApplicationCommandInteractionDataResolved, ApplicationCommandType, ComponentType,
    InteractionType, MessageComponentInteraction, ModalSubmitInteraction as RawModalSubmit,
};
use model::Snowflake;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Turns a parsed payload into one of the interaction kinds. The outer
/// `type` picks the family; commands and components are then split again on
/// `data.type` and `data.component_type`. Anything unrecognised, or any
/// payload whose fields don't match its declared kind, yields `None`.
pub fn classify(value: Value, api: Arc<dyn InteractionApi>) -> Option<Interaction> {
    let interaction_type = discriminant(&value, &["type"]).and_then(|t| {
        InteractionType::try_from(t)
            .map_err(|e| debug!(error = %e, "Unrecognised interaction type"))
            .ok()
    })?;

    match interaction_type {
        InteractionType::Ping => Some(Interaction::Ping {
            id: value.get("id").and_then(Snowflake::from_value)?,
            application_id: value.get("application_id").and_then(Snowflake::from_value)?,
        }),

        InteractionType::ApplicationCommand => {
            let command_type = discriminant(&value, &["data", "type"]).and_then(|t| {
                ApplicationCommandType::try_from(t)
                    .map_err(|e| debug!(error = %e, "Unrecognised command type"))
                    .ok()
            })?;

            let raw: ApplicationCommandInteraction = parse(value)?;
            command(raw, command_type, api).map(Interaction::Command)
        }

        InteractionType::MessageComponent => {
            let component_type = discriminant(&value, &["data", "component_type"]).and_then(|t| {
                ComponentType::try_from(t)
                    .map_err(|e| debug!(error = %e, "Unrecognised component type"))
                    .ok()
            })?;

            let raw: MessageComponentInteraction = parse(value)?;
            component(raw, component_type, api).map(Interaction::Component)
        }

        InteractionType::ApplicationCommandAutoComplete => {
            let raw: ApplicationCommandAutoCompleteInteraction = parse(value)?;

            Some(Interaction::Autocomplete(AutocompleteInteraction {
                base: InteractionBase::new(raw.metadata, InteractionKind::Autocomplete, api),
                command_id: raw.data.id,
                command_name: raw.data.name,
                options: raw.data.options,
            }))
        }

        InteractionType::ModalSubmit => {
            let raw: RawModalSubmit = parse(value)?;

            Some(Interaction::ModalSubmit(ModalSubmitInteraction {
                base: InteractionBase::new(raw.metadata, InteractionKind::ModalSubmit, api),
                custom_id: raw.data.custom_id,
                components: raw.data.components,
                message: raw.message,
            }))
        }
    }
}

fn discriminant(value: &Value, path: &[&str]) -> Option<u64> {
    let found = path
        .iter()
        .try_fold(value, |value, key| value.get(key))
        .and_then(Value::as_u64);

    if found.is_none() {
        debug!(path = ?path, "Interaction discriminant missing or not an integer");
    }

    found
}

fn parse<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value)
        .map_err(|e| debug!(error = %e, "Interaction payload does not match its type"))
        .ok()
}

fn command(
    raw: ApplicationCommandInteraction,
    command_type: ApplicationCommandType,
    api: Arc<dyn InteractionApi>,
) -> Option<CommandInteraction> {
    let mut data = raw.data;

    let kind = match command_type {
        ApplicationCommandType::ChatInput => CommandKind::ChatInput {
            options: data.options,
            resolved: data.resolved,
        },

        ApplicationCommandType::User => {
            let target_id = data.target_id?;
            CommandKind::UserContextMenu {
                target: data.resolved.users.remove(&target_id)?,
                target_member: data.resolved.members.remove(&target_id),
            }
        }

        ApplicationCommandType::Message => {
            let target_id = data.target_id?;
            CommandKind::MessageContextMenu {
                target: data.resolved.messages.remove(&target_id)?,
            }
        }

        ApplicationCommandType::PrimaryEntryPoint => CommandKind::PrimaryEntryPoint,
    };

    Some(CommandInteraction {
        base: InteractionBase::new(raw.metadata, InteractionKind::Command(command_type), api),
        command_id: data.id,
        command_name: data.name,
        kind,
    })
}

fn component(
    raw: MessageComponentInteraction,
    component_type: ComponentType,
    api: Arc<dyn InteractionApi>,
) -> Option<ComponentInteraction> {
    let data = raw.data;
    let values = data.values;
    let mut resolved = data.resolved;

    let kind = match component_type {
        ComponentType::Button => ComponentKind::Button,

        ComponentType::StringSelect => ComponentKind::StringSelect {
            values: values.into_iter().map(String::from).collect(),
        },

        ComponentType::UserSelect => ComponentKind::UserSelect {
            users: take_all(&values, &mut resolved.users)?,
            members: resolved.members,
        },

        ComponentType::RoleSelect => ComponentKind::RoleSelect {
            roles: take_all(&values, &mut resolved.roles)?,
        },

        ComponentType::ChannelSelect => ComponentKind::ChannelSelect {
            channels: take_all(&values, &mut resolved.channels)?,
        },

        ComponentType::MentionableSelect => mentionables(&values, resolved)?,

        other => {
            debug!(component_type = ?other, "Component type is not interactive");
            return None;
        }
    };

    Some(ComponentInteraction {
        base: InteractionBase::new(raw.metadata, InteractionKind::Component(component_type), api),
        custom_id: data.custom_id,
        message: raw.message,
        kind,
    })
}

/// Looks every selected id up in the resolved map. A missing entry means the
/// payload is inconsistent.
fn take_all<T>(ids: &[Box<str>], resolved: &mut HashMap<Snowflake, T>) -> Option<Vec<T>> {
    ids.iter()
        .map(|id| {
            let id: Snowflake = id.parse().ok()?;
            resolved.remove(&id)
        })
        .collect()
}

fn mentionables(
    ids: &[Box<str>],
    mut resolved: ApplicationCommandInteractionDataResolved,
) -> Option<ComponentKind> {
    let mut users = Vec::new();
    let mut roles = Vec::new();

    for id in ids {
        let id: Snowflake = id.parse().ok()?;

        if let Some(user) = resolved.users.remove(&id) {
            users.push(user);
        } else {
            roles.push(resolved.roles.remove(&id)?);
        }
    }

    Some(ComponentKind::MentionableSelect { users, roles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::tests::NullApi;
    use serde_json::json;

    fn api() -> Arc<dyn InteractionApi> {
        Arc::new(NullApi)
    }

    fn envelope(interaction_type: u8, data: Value) -> Value {
        json!({
            "id": "100",
            "application_id": "200",
            "type": interaction_type,
            "token": "tok",
            "guild_id": "300",
            "channel_id": "400",
            "member": {"user": {"id": "500", "username": "alice"}, "roles": []},
            "message": {"id": "600", "channel_id": "400", "content": "hello"},
            "data": data
        })
    }

    #[test]
    fn test_ping() {
        let value = json!({"id": "1", "application_id": "2", "type": 1, "token": "t"});

        match classify(value, api()) {
            Some(Interaction::Ping { id, application_id }) => {
                assert_eq!(id, Snowflake(1));
                assert_eq!(application_id, Snowflake(2));
            }
            other => panic!("expected ping, got {:?}", other),
        }
    }

    #[test]
    fn test_chat_input() {
        let value = envelope(
            2,
            json!({
                "id": "700", "name": "echo", "type": 1,
                "options": [{"name": "text", "type": 3, "value": "hi"}]
            }),
        );

        let command = match classify(value, api()) {
            Some(Interaction::Command(command)) => command,
            other => panic!("expected command, got {:?}", other),
        };

        assert_eq!(&*command.command_name, "echo");
        assert_eq!(command.options().len(), 1);
        assert_eq!(
            command.base.kind,
            InteractionKind::Command(ApplicationCommandType::ChatInput)
        );
        assert_eq!(command.user_id(), Some(Snowflake(500)));
        assert_eq!(&*command.token, "tok");
    }

    #[test]
    fn test_user_context_menu_resolves_target() {
        let value = envelope(
            2,
            json!({
                "id": "700", "name": "Inspect", "type": 2, "target_id": "800",
                "resolved": {
                    "users": {"800": {"id": "800", "username": "bob"}},
                    "members": {"800": {"roles": [], "nick": "bobby"}}
                }
            }),
        );

        let command = match classify(value, api()) {
            Some(Interaction::Command(command)) => command,
            other => panic!("expected command, got {:?}", other),
        };

        match command.kind {
            CommandKind::UserContextMenu { target, target_member } => {
                assert_eq!(target.id, Snowflake(800));
                assert_eq!(target_member.and_then(|m| m.nick).as_deref(), Some("bobby"));
            }
            other => panic!("expected user context menu, got {:?}", other),
        }
    }

    #[test]
    fn test_context_menu_without_resolved_target() {
        let value = envelope(
            2,
            json!({"id": "700", "name": "Inspect", "type": 3, "target_id": "800"}),
        );

        assert!(classify(value, api()).is_none());
    }

    #[test]
    fn test_button() {
        let value = envelope(3, json!({"custom_id": "\u{7}extra", "component_type": 2}));

        let component = match classify(value, api()) {
            Some(Interaction::Component(component)) => component,
            other => panic!("expected component, got {:?}", other),
        };

        assert!(matches!(component.kind, ComponentKind::Button));
        assert_eq!(&*component.custom_id, "\u{7}extra");
        assert_eq!(component.message.id, Snowflake(600));
    }

    #[test]
    fn test_role_select_resolves_in_order() {
        let value = envelope(
            3,
            json!({
                "custom_id": "\u{2}", "component_type": 6,
                "values": ["11", "10"],
                "resolved": {"roles": {
                    "10": {"id": "10", "name": "mods"},
                    "11": {"id": "11", "name": "admins"}
                }}
            }),
        );

        let component = match classify(value, api()) {
            Some(Interaction::Component(component)) => component,
            other => panic!("expected component, got {:?}", other),
        };

        match component.kind {
            ComponentKind::RoleSelect { roles } => {
                let names: Vec<&str> = roles.iter().map(|r| &*r.name).collect();
                assert_eq!(names, vec!["admins", "mods"]);
            }
            other => panic!("expected role select, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_discriminants() {
        assert!(classify(json!({"type": 9}), api()).is_none());
        assert!(classify(json!({"type": "2"}), api()).is_none());
        assert!(classify(envelope(2, json!({"id": "1", "name": "x", "type": 9})), api()).is_none());
        assert!(classify(envelope(3, json!({"custom_id": "a", "component_type": 4})), api()).is_none());
        assert!(classify(envelope(3, json!({"custom_id": "a"})), api()).is_none());
    }

    #[test]
    fn test_modal_submit() {
        let value = envelope(
            5,
            json!({
                "custom_id": "\u{3}ctx",
                "components": [{"type": 18, "component": {"type": 4, "custom_id": "name", "value": "Ada"}}]
            }),
        );

        match classify(value, api()) {
            Some(Interaction::ModalSubmit(modal)) => {
                assert_eq!(&*modal.custom_id, "\u{3}ctx");
                assert_eq!(modal.components.len(), 1);
                assert!(modal.message.is_some());
            }
            other => panic!("expected modal submit, got {:?}", other),
        }
    }
}
