//! The interaction kinds handlers receive. Each kind embeds an
//! [`InteractionBase`] carrying the shared fields and the reply methods, and
//! derefs to it.

mod autocomplete;
pub use autocomplete::AutocompleteInteraction;

mod command;
pub use command::{CommandInteraction, CommandKind};

mod component;
pub use component::{ComponentInteraction, ComponentKind};

mod modal;
pub use modal::ModalSubmitInteraction;

use crate::reply::{MessagePayload, Reply};
use crate::rest::{InteractionApi, RestError};
use crate::{ContractViolation, ErrorCode};
use model::channel::message::Message;
use model::guild::Member;
use model::interaction::{
    ApplicationCommandType, ComponentType, InteractionMetadata, InteractionResponse,
    ModalCallbackData,
};
use model::user::User;
use model::{PermissionBitSet, Snowflake};
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum Interaction {
    Ping { id: Snowflake, application_id: Snowflake },
    Command(CommandInteraction),
    Component(ComponentInteraction),
    ModalSubmit(ModalSubmitInteraction),
    Autocomplete(AutocompleteInteraction),
}

/// Fixed when the interaction is classified; decides which replies are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Command(ApplicationCommandType),
    Component(ComponentType),
    ModalSubmit,
    Autocomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplyAction {
    Reply,
    DeferReply,
    Update,
    DeferUpdate,
    ShowModal,
    LaunchActivity,
}

impl InteractionKind {
    fn check(&self, action: ReplyAction) -> Result<(), ContractViolation> {
        let code = match (self, action) {
            (InteractionKind::Autocomplete, _) => ErrorCode::AutocompleteInteractionCannotReply,
            (InteractionKind::Command(_), ReplyAction::Update) => {
                ErrorCode::CommandInteractionCannotUpdate
            }
            (InteractionKind::Command(_), ReplyAction::DeferUpdate) => {
                ErrorCode::CommandInteractionCannotDeferUpdate
            }
            (InteractionKind::ModalSubmit, ReplyAction::ShowModal) => {
                ErrorCode::ModalSubmitInteractionCannotShowModal
            }
            _ => return Ok(()),
        };

        Err(ContractViolation::from(code))
    }
}

#[derive(Clone)]
pub struct InteractionBase {
    pub id: Snowflake,
    pub application_id: Snowflake,
    pub token: Box<str>,
    pub kind: InteractionKind,
    pub guild_id: Option<Snowflake>,
    pub channel_id: Option<Snowflake>,
    /// The invoking user, taken from the member in guilds.
    pub user: Option<User>,
    pub member: Option<Member>,
    pub app_permissions: Option<PermissionBitSet>,
    pub locale: Option<Box<str>>,
    pub guild_locale: Option<Box<str>>,
    api: Arc<dyn InteractionApi>,
}

impl InteractionBase {
    pub(crate) fn new(
        metadata: InteractionMetadata,
        kind: InteractionKind,
        api: Arc<dyn InteractionApi>,
    ) -> InteractionBase {
        let user = metadata.invoking_user().cloned();
        let channel_id = metadata.channel_id();

        InteractionBase {
            id: metadata.id,
            application_id: metadata.application_id,
            token: metadata.token,
            kind,
            guild_id: metadata.guild_id,
            channel_id,
            user,
            member: metadata.member,
            app_permissions: metadata.app_permissions,
            locale: metadata.locale,
            guild_locale: metadata.guild_locale,
            api,
        }
    }

    pub fn user_id(&self) -> Option<Snowflake> {
        self.user.as_ref().map(|user| user.id)
    }

    pub fn reply(&self, payload: impl Into<MessagePayload>) -> Result<Reply, ContractViolation> {
        self.kind.check(ReplyAction::Reply)?;

        let MessagePayload { data, files } = payload.into();
        Ok(Reply::with_files(
            InteractionResponse::new_channel_message_with_source(data),
            files,
        ))
    }

    pub fn reply_with_files(
        &self,
        payload: impl Into<MessagePayload>,
        files: Vec<crate::File>,
    ) -> Result<Reply, ContractViolation> {
        let mut payload = payload.into();
        payload.files.extend(files);
        self.reply(payload)
    }

    pub fn defer_reply(&self, ephemeral: bool) -> Result<Reply, ContractViolation> {
        self.kind.check(ReplyAction::DeferReply)?;
        Ok(Reply::new(
            InteractionResponse::new_deferred_message_with_source(ephemeral),
        ))
    }

    /// Edits the message the component was attached to.
    pub fn update(&self, payload: impl Into<MessagePayload>) -> Result<Reply, ContractViolation> {
        self.kind.check(ReplyAction::Update)?;

        let MessagePayload { data, files } = payload.into();
        Ok(Reply::with_files(
            InteractionResponse::new_update_message(data),
            files,
        ))
    }

    pub fn defer_update(&self) -> Result<Reply, ContractViolation> {
        self.kind.check(ReplyAction::DeferUpdate)?;
        Ok(Reply::new(InteractionResponse::new_deferred_message_update()))
    }

    pub fn show_modal(&self, modal: ModalCallbackData) -> Result<Reply, ContractViolation> {
        self.kind.check(ReplyAction::ShowModal)?;
        Ok(Reply::new(InteractionResponse::new_modal(modal)))
    }

    pub fn launch_activity(&self) -> Result<Reply, ContractViolation> {
        self.kind.check(ReplyAction::LaunchActivity)?;
        Ok(Reply::new(InteractionResponse::new_launch_activity()))
    }

    pub async fn follow_up(&self, payload: impl Into<MessagePayload>) -> Result<Message, RestError> {
        self.api
            .follow_up(self.application_id, &self.token, payload.into())
            .await
    }

    /// Edits the original response, or a follow-up when `message_id` is set.
    pub async fn edit_reply(
        &self,
        payload: impl Into<MessagePayload>,
        message_id: Option<Snowflake>,
    ) -> Result<Message, RestError> {
        self.api
            .edit_reply(self.application_id, &self.token, payload.into(), message_id)
            .await
    }

    pub async fn delete_reply(&self, message_id: Option<Snowflake>) -> Result<(), RestError> {
        self.api
            .delete_reply(self.application_id, &self.token, message_id)
            .await
    }

    pub async fn fetch_reply(&self) -> Result<Message, RestError> {
        self.api
            .get_original_reply(self.application_id, &self.token)
            .await
    }

    /// Opens a modal through the callback endpoint instead of the HTTP
    /// response. Only possible while the interaction is unacknowledged.
    pub async fn send_modal(&self, modal: ModalCallbackData) -> Result<(), RestError> {
        self.kind.check(ReplyAction::ShowModal)?;
        self.api.create_modal(self.id, &self.token, modal).await
    }

    pub async fn update_message(&self, payload: impl Into<MessagePayload>) -> Result<(), RestError> {
        self.kind.check(ReplyAction::Update)?;
        self.api
            .update_message(self.id, &self.token, payload.into())
            .await
    }
}

impl fmt::Debug for InteractionBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionBase")
            .field("id", &self.id)
            .field("application_id", &self.application_id)
            .field("kind", &self.kind)
            .field("guild_id", &self.guild_id)
            .field("channel_id", &self.channel_id)
            .field("user", &self.user_id())
            .finish_non_exhaustive()
    }
}

macro_rules! deref_base {
    ($t:ty) => {
        impl std::ops::Deref for $t {
            type Target = $crate::interaction::InteractionBase;

            fn deref(&self) -> &Self::Target {
                &self.base
            }
        }
    };
}

pub(crate) use deref_base;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::rest::tests::NullApi;
    use model::interaction::InteractionType;

    pub(crate) fn base(kind: InteractionKind) -> InteractionBase {
        let metadata: InteractionMetadata = serde_json::from_value(serde_json::json!({
            "id": "10",
            "application_id": "20",
            "type": InteractionType::ApplicationCommand as u8,
            "token": "token",
            "channel_id": "30",
            "user": {"id": "40", "username": "alice"}
        }))
        .unwrap();

        InteractionBase::new(metadata, kind, Arc::new(NullApi))
    }

    #[test]
    fn test_command_cannot_update() {
        let command = base(InteractionKind::Command(ApplicationCommandType::ChatInput));

        assert!(command.reply("hi").is_ok());
        assert!(command.defer_reply(true).is_ok());
        assert!(command.show_modal(ModalCallbackData::new("\u{1}", "Title")).is_ok());
        assert_eq!(
            command.update("hi").unwrap_err().code,
            ErrorCode::CommandInteractionCannotUpdate
        );
        assert_eq!(
            command.defer_update().unwrap_err().code,
            ErrorCode::CommandInteractionCannotDeferUpdate
        );
    }

    #[test]
    fn test_modal_submit_cannot_show_modal() {
        let modal = base(InteractionKind::ModalSubmit);

        assert!(modal.update("hi").is_ok());
        assert!(modal.defer_update().is_ok());
        assert_eq!(
            modal
                .show_modal(ModalCallbackData::new("\u{1}", "Again"))
                .unwrap_err()
                .code,
            ErrorCode::ModalSubmitInteractionCannotShowModal
        );
    }

    #[test]
    fn test_autocomplete_cannot_reply() {
        let autocomplete = base(InteractionKind::Autocomplete);

        for result in [
            autocomplete.reply("hi"),
            autocomplete.defer_reply(false),
            autocomplete.launch_activity(),
        ] {
            assert_eq!(
                result.unwrap_err().code,
                ErrorCode::AutocompleteInteractionCannotReply
            );
        }
    }

    #[test]
    fn test_component_allows_everything() {
        let button = base(InteractionKind::Component(ComponentType::Button));

        assert!(button.reply("hi").is_ok());
        assert!(button.update("hi").is_ok());
        assert!(button.defer_update().is_ok());
        assert!(button.launch_activity().is_ok());
    }

    #[tokio::test]
    async fn test_send_modal_checks_kind_before_calling_api() {
        let modal = base(InteractionKind::ModalSubmit);

        let err = modal
            .send_modal(ModalCallbackData::new("\u{1}", "Again"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RestError::Contract(ContractViolation {
                code: ErrorCode::ModalSubmitInteractionCannotShowModal
            })
        ));
    }
}
