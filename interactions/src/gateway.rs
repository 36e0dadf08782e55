use crate::arguments::Arguments;
use crate::classify::classify;
use crate::custom_id;
use crate::dispatch::{authorize, dispatch, DeferredJob, Dispatch};
use crate::fields::ModalSubmission;
use crate::interaction::{
    AutocompleteInteraction, CommandInteraction, ComponentInteraction, ComponentKind, Interaction,
    ModalSubmitInteraction,
};
use crate::rest::InteractionApi;
use crate::{Error, Registry, Reply, Response, Verifier};
use model::interaction::InteractionType;
use model::Snowflake;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Everything the host needs to answer one request: the response to write,
/// and possibly a job to start once that response has been delivered.
#[derive(Debug)]
pub struct Handled {
    pub response: Response,
    pub deferred: Option<DeferredJob>,
}

impl Handled {
    fn immediate(response: Response) -> Handled {
        Handled {
            response,
            deferred: None,
        }
    }
}

/// Verifies, classifies and routes inbound interactions to the registry's
/// handlers.
pub struct Gateway {
    verifier: Verifier,
    registry: Arc<Registry>,
    api: Arc<dyn InteractionApi>,
    owner_id: Option<Snowflake>,
}

impl Gateway {
    pub fn new(verifier: Verifier, registry: Arc<Registry>, api: Arc<dyn InteractionApi>) -> Gateway {
        Gateway {
            verifier,
            registry,
            api,
            owner_id: None,
        }
    }

    /// Without an owner, owner-only commands are denied to everyone.
    pub fn with_owner(mut self, owner_id: Snowflake) -> Gateway {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub async fn handle(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Handled {
        match self.process(signature, timestamp, body).await {
            Ok(Dispatch::Immediate(reply)) => Handled::immediate(render(reply)),
            Ok(Dispatch::Deferred {
                acknowledgement,
                job,
            }) => match Response::from_reply(acknowledgement) {
                Ok(response) => Handled {
                    response,
                    deferred: Some(job),
                },
                Err(e) => Handled::immediate(Response::error(&e)),
            },
            Err(e) => {
                debug!(error = %e, status = %e.status_code(), "Interaction rejected");
                Handled::immediate(Response::error(&e))
            }
        }
    }

    async fn process(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Result<Dispatch, Error> {
        if !self.verifier.verify(signature, timestamp, body) {
            return Err(Error::InvalidSignature);
        }

        let value: Value = serde_json::from_slice(body)?;

        if value.get("type").and_then(Value::as_u64) == Some(InteractionType::Ping as u64) {
            debug!("Received ping");
            return Ok(Dispatch::Immediate(Reply::pong()));
        }

        match classify(value, Arc::clone(&self.api)).ok_or(Error::UnknownInteraction)? {
            Interaction::Ping { .. } => Ok(Dispatch::Immediate(Reply::pong())),
            Interaction::Command(interaction) => self.route_command(interaction).await,
            Interaction::Component(interaction) => self.route_component(interaction).await,
            Interaction::ModalSubmit(interaction) => self.route_modal(interaction).await,
            Interaction::Autocomplete(interaction) => self.route_autocomplete(interaction).await,
        }
    }

    async fn route_command(&self, interaction: CommandInteraction) -> Result<Dispatch, Error> {
        let command = self
            .registry
            .lookup_command(&interaction.command_name)
            .ok_or_else(|| Error::UnknownCommand(interaction.command_name.clone()))?;

        let command_type = interaction.kind.command_type();
        if command.kind != command_type {
            return Err(Error::CommandTypeMismatch {
                name: command.name.clone(),
                kind: command_type,
            });
        }

        debug!(command = %command.name, command_type = ?command_type, "Routing command");

        if let Some(denial) = authorize(command, interaction.user_id(), self.owner_id) {
            return Ok(Dispatch::Immediate(denial));
        }

        let args = Arguments::normalize(interaction.options(), &command.arguments)?;

        dispatch(
            &command.runner,
            format!("command:{}", command.name),
            interaction,
            args,
        )
        .await
    }

    async fn route_component(&self, interaction: ComponentInteraction) -> Result<Dispatch, Error> {
        if !matches!(interaction.kind, ComponentKind::Button) {
            return Err(Error::UnsupportedComponentType(
                interaction.kind.component_type(),
            ));
        }

        let decoded = custom_id::decode(&interaction.custom_id).ok_or(Error::MalformedCustomId)?;
        let button = self
            .registry
            .lookup_button(decoded.handler_id)
            .ok_or(Error::UnknownButton(decoded.handler_id))?;

        debug!(handler_id = button.id, "Routing button");

        let data = decoded.data.to_owned();
        dispatch(&button.runner, format!("button:{}", button.id), interaction, data).await
    }

    async fn route_modal(&self, interaction: ModalSubmitInteraction) -> Result<Dispatch, Error> {
        let decoded = custom_id::decode(&interaction.custom_id).ok_or(Error::MalformedCustomId)?;
        let modal = self
            .registry
            .lookup_modal(decoded.handler_id)
            .ok_or(Error::UnknownModal(decoded.handler_id))?;

        debug!(handler_id = modal.id, "Routing modal submission");

        let submission = ModalSubmission::new(&interaction.components, decoded.data);
        dispatch(&modal.runner, format!("modal:{}", modal.id), interaction, submission).await
    }

    async fn route_autocomplete(
        &self,
        interaction: AutocompleteInteraction,
    ) -> Result<Dispatch, Error> {
        let command = self
            .registry
            .lookup_command(&interaction.command_name)
            .ok_or_else(|| Error::UnknownCommand(interaction.command_name.clone()))?;

        let focused = interaction
            .focused_option()
            .ok_or(Error::MissingFocusedOption)?;

        let argument = command
            .find_argument(&focused.name)
            .ok_or_else(|| Error::AutocompleteUnavailable(focused.name.clone()))?;

        if argument.kind != focused.r#type {
            return Err(Error::ArgumentTypeMismatch {
                name: focused.name.clone(),
                declared: argument.kind,
                sent: focused.r#type,
            });
        }

        let callback = argument
            .autocomplete
            .as_ref()
            .ok_or_else(|| Error::AutocompleteUnavailable(focused.name.clone()))?;

        // Partial input is handed over as typed, whatever the declared type.
        let current = match &focused.value {
            Some(Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
            None => String::new(),
        };

        debug!(command = %command.name, argument = %argument.name, "Routing autocomplete");

        let label = format!("autocomplete:{}:{}", command.name, argument.name);
        let choices = callback(interaction.clone(), current)
            .await
            .map_err(|error| Error::Handler { label, error })?;

        Ok(Dispatch::Immediate(interaction.respond(choices)))
    }
}

fn render(reply: Reply) -> Response {
    Response::from_reply(reply).unwrap_or_else(|e| Response::error(&e))
}
