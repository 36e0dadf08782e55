use crate::custom_id;
use crate::handler::{Acknowledgement, Button, Command, Modal};
use crate::RegistryError;
use model::interaction::ApplicationCommandType;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Every handler the process serves, keyed for constant-time routing. Built
/// once at startup and never mutated, so it is shared across requests behind
/// an `Arc` without locking.
#[derive(Debug, Default)]
pub struct Registry {
    commands: HashMap<Box<str>, Command>,
    buttons: HashMap<u16, Button>,
    modals: HashMap<u16, Modal>,
}

impl Registry {
    pub fn build(
        commands: Vec<Command>,
        buttons: Vec<Button>,
        modals: Vec<Modal>,
    ) -> Result<Registry, RegistryError> {
        let mut registry = Registry::default();

        for command in commands {
            validate_command(&command)?;

            if registry.commands.contains_key(&command.name) {
                return Err(RegistryError::DuplicateCommand(command.name));
            }

            registry.commands.insert(command.name.clone(), command);
        }

        for button in buttons {
            let id = button.id;
            if !custom_id::is_valid_handler_id(id) {
                return Err(RegistryError::InvalidHandlerId(id));
            }

            if registry.buttons.insert(id, button).is_some() {
                return Err(RegistryError::DuplicateButton(id));
            }
        }

        for modal in modals {
            let id = modal.id;
            if !custom_id::is_valid_handler_id(id) {
                return Err(RegistryError::InvalidHandlerId(id));
            }

            if registry.modals.insert(id, modal).is_some() {
                return Err(RegistryError::DuplicateModal(id));
            }
        }

        debug!(
            commands = registry.commands.len(),
            buttons = registry.buttons.len(),
            modals = registry.modals.len(),
            "Built handler registry"
        );

        Ok(registry)
    }

    pub fn lookup_command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn lookup_button(&self, id: u16) -> Option<&Button> {
        self.buttons.get(&id)
    }

    pub fn lookup_modal(&self, id: u16) -> Option<&Modal> {
        self.modals.get(&id)
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn modal_count(&self) -> usize {
        self.modals.len()
    }
}

fn validate_command(command: &Command) -> Result<(), RegistryError> {
    if command.runner.acknowledgement() == Some(Acknowledgement::Update) {
        return Err(RegistryError::CommandCannotDeferUpdate(command.name.clone()));
    }

    if command.kind != ApplicationCommandType::ChatInput && !command.arguments.is_empty() {
        return Err(RegistryError::ArgumentsOnContextMenu {
            command: command.name.clone(),
            kind: command.kind,
        });
    }

    let mut seen = HashSet::new();
    for argument in &command.arguments {
        if !seen.insert(&argument.name) {
            return Err(RegistryError::DuplicateArgument {
                command: command.name.clone(),
                argument: argument.name.clone(),
            });
        }

        if argument.autocomplete.is_some() && !argument.kind.supports_autocomplete() {
            return Err(RegistryError::UnsupportedAutocomplete {
                command: command.name.clone(),
                argument: argument.name.clone(),
                kind: argument.kind,
            });
        }
    }

    Ok(())
}
