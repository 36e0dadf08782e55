use crate::arguments::Arguments;
use crate::custom_id;
use crate::fields::ModalSubmission;
use crate::interaction::{
    AutocompleteInteraction, CommandInteraction, ComponentInteraction, ModalSubmitInteraction,
};
use crate::{CustomIdError, Reply};
use futures::future::BoxFuture;
use futures::FutureExt;
use model::interaction::{
    ApplicationCommandOptionChoice, ApplicationCommandOptionType, ApplicationCommandType,
    InteractionResponse,
};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub type ReplyCallback<I, A> =
    Arc<dyn Fn(I, A) -> BoxFuture<'static, anyhow::Result<Reply>> + Send + Sync>;

pub type DeferredCallback<I, A> =
    Arc<dyn Fn(I, A) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

pub type Choices = Vec<ApplicationCommandOptionChoice>;

pub type AutocompleteCallback = Arc<
    dyn Fn(AutocompleteInteraction, String) -> BoxFuture<'static, anyhow::Result<Choices>>
        + Send
        + Sync,
>;

/// How a handler answers: with its own reply, or with an immediate deferred
/// acknowledgement while the callback continues in the background.
pub enum Runner<I, A> {
    Immediate(ReplyCallback<I, A>),
    Deferred {
        acknowledgement: Acknowledgement,
        callback: DeferredCallback<I, A>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// "Thinking..." placeholder, replaced by the first follow-up or edit.
    Reply { ephemeral: bool },
    /// Acknowledges a component or modal without touching its message yet.
    Update,
}

impl Acknowledgement {
    pub(crate) fn reply(&self) -> Reply {
        match self {
            Acknowledgement::Reply { ephemeral } => Reply::new(
                InteractionResponse::new_deferred_message_with_source(*ephemeral),
            ),
            Acknowledgement::Update => {
                Reply::new(InteractionResponse::new_deferred_message_update())
            }
        }
    }
}

impl<I: Send + 'static, A: Send + 'static> Runner<I, A> {
    pub fn immediate<F, Fut>(callback: F) -> Runner<I, A>
    where
        F: Fn(I, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Reply>> + Send + 'static,
    {
        Runner::Immediate(Arc::new(move |interaction: I, args: A| {
            callback(interaction, args).boxed()
        }))
    }

    pub fn deferred<F, Fut>(acknowledgement: Acknowledgement, callback: F) -> Runner<I, A>
    where
        F: Fn(I, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Runner::Deferred {
            acknowledgement,
            callback: Arc::new(move |interaction: I, args: A| {
                callback(interaction, args).boxed()
            }),
        }
    }

    pub fn deferred_reply<F, Fut>(callback: F) -> Runner<I, A>
    where
        F: Fn(I, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Runner::deferred(Acknowledgement::Reply { ephemeral: false }, callback)
    }

    pub fn deferred_ephemeral<F, Fut>(callback: F) -> Runner<I, A>
    where
        F: Fn(I, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Runner::deferred(Acknowledgement::Reply { ephemeral: true }, callback)
    }

    pub fn deferred_update<F, Fut>(callback: F) -> Runner<I, A>
    where
        F: Fn(I, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Runner::deferred(Acknowledgement::Update, callback)
    }
}

impl<I, A> Runner<I, A> {
    pub fn acknowledgement(&self) -> Option<Acknowledgement> {
        match self {
            Runner::Immediate(_) => None,
            Runner::Deferred { acknowledgement, .. } => Some(*acknowledgement),
        }
    }
}

impl<I, A> Clone for Runner<I, A> {
    fn clone(&self) -> Self {
        match self {
            Runner::Immediate(callback) => Runner::Immediate(Arc::clone(callback)),
            Runner::Deferred {
                acknowledgement,
                callback,
            } => Runner::Deferred {
                acknowledgement: *acknowledgement,
                callback: Arc::clone(callback),
            },
        }
    }
}

impl<I, A> fmt::Debug for Runner<I, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runner::Immediate(_) => f.write_str("Immediate"),
            Runner::Deferred {
                acknowledgement, ..
            } => f
                .debug_struct("Deferred")
                .field("acknowledgement", acknowledgement)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Command {
    pub name: Box<str>,
    pub description: Box<str>,
    pub kind: ApplicationCommandType,
    pub owner_only: bool,
    pub arguments: Vec<Argument>,
    pub runner: Runner<CommandInteraction, Arguments>,
}

impl Command {
    /// A chat input command. Use [`Command::kind`] for context menus.
    pub fn new(
        name: &str,
        description: &str,
        runner: Runner<CommandInteraction, Arguments>,
    ) -> Command {
        Command {
            name: Box::from(name),
            description: Box::from(description),
            kind: ApplicationCommandType::ChatInput,
            owner_only: false,
            arguments: Vec::new(),
            runner,
        }
    }

    pub fn kind(mut self, kind: ApplicationCommandType) -> Command {
        self.kind = kind;
        self
    }

    pub fn owner_only(mut self) -> Command {
        self.owner_only = true;
        self
    }

    pub fn argument(mut self, argument: Argument) -> Command {
        self.arguments.push(argument);
        self
    }

    pub fn find_argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|argument| &*argument.name == name)
    }
}

#[derive(Clone)]
pub struct Argument {
    pub name: Box<str>,
    pub description: Box<str>,
    pub kind: ApplicationCommandOptionType,
    pub required: bool,
    pub autocomplete: Option<AutocompleteCallback>,
}

impl Argument {
    pub fn new(name: &str, description: &str, kind: ApplicationCommandOptionType) -> Argument {
        Argument {
            name: Box::from(name),
            description: Box::from(description),
            kind,
            required: false,
            autocomplete: None,
        }
    }

    pub fn required(mut self) -> Argument {
        self.required = true;
        self
    }

    /// Receives the partially typed value as a string, whatever the declared
    /// type.
    pub fn autocomplete<F, Fut>(mut self, callback: F) -> Argument
    where
        F: Fn(AutocompleteInteraction, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Choices>> + Send + 'static,
    {
        self.autocomplete = Some(Arc::new(
            move |interaction: AutocompleteInteraction, value: String| {
                callback(interaction, value).boxed()
            },
        ));
        self
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("autocomplete", &self.autocomplete.is_some())
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Button {
    pub id: u16,
    pub runner: Runner<ComponentInteraction, String>,
}

impl Button {
    pub fn new(id: u16, runner: Runner<ComponentInteraction, String>) -> Button {
        Button { id, runner }
    }

    /// A custom id that routes clicks back to this button with `data`.
    pub fn custom_id(&self, data: &str) -> Result<String, CustomIdError> {
        custom_id::encode(self.id, data)
    }
}

#[derive(Clone, Debug)]
pub struct Modal {
    pub id: u16,
    pub title: Box<str>,
    pub runner: Runner<ModalSubmitInteraction, ModalSubmission>,
}

impl Modal {
    pub fn new(
        id: u16,
        title: &str,
        runner: Runner<ModalSubmitInteraction, ModalSubmission>,
    ) -> Modal {
        Modal {
            id,
            title: Box::from(title),
            runner,
        }
    }

    pub fn custom_id(&self, data: &str) -> Result<String, CustomIdError> {
        custom_id::encode(self.id, data)
    }
}
