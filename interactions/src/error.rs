use model::interaction::{ApplicationCommandOptionType, ApplicationCommandType, ComponentType};
use reqwest::StatusCode;
use serde::Serializer;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Request-level failures. Each maps to exactly one HTTP status.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad request signature")]
    InvalidSignature,

    #[error("error while decoding json payload: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("unrecognised interaction")]
    UnknownInteraction,

    #[error("unknown command \"{0}\"")]
    UnknownCommand(Box<str>),

    #[error("command \"{name}\" is not registered as a {kind:?} command")]
    CommandTypeMismatch {
        name: Box<str>,
        kind: ApplicationCommandType,
    },

    #[error("unsupported command type {0:?}")]
    UnsupportedCommandType(ApplicationCommandType),

    #[error("unsupported component type {0:?}")]
    UnsupportedComponentType(ComponentType),

    #[error("custom id does not carry a handler id")]
    MalformedCustomId,

    #[error("no button registered with id {0}")]
    UnknownButton(u16),

    #[error("no modal registered with id {0}")]
    UnknownModal(u16),

    #[error("autocomplete request has no focused option")]
    MissingFocusedOption,

    #[error("argument \"{0}\" does not support autocomplete")]
    AutocompleteUnavailable(Box<str>),

    #[error("argument \"{name}\" is declared as {declared} but was sent as {sent}")]
    ArgumentTypeMismatch {
        name: Box<str>,
        declared: ApplicationCommandOptionType,
        sent: ApplicationCommandOptionType,
    },

    #[error("argument \"{0}\" has an invalid value")]
    InvalidArgument(Box<str>),

    #[error("missing required argument \"{0}\"")]
    MissingArgument(Box<str>),

    #[error("handler {label} failed: {error:#}")]
    Handler { label: String, error: anyhow::Error },

    #[error("error while encoding response: {0}")]
    EncodeError(serde_json::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidSignature => StatusCode::UNAUTHORIZED,
            Error::Handler { .. } | Error::EncodeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl serde::Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}", self)[..])
    }
}

/// Handler definitions that can never be served. Raised while building the
/// registry, before any request is accepted.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command \"{0}\" is registered more than once")]
    DuplicateCommand(Box<str>),

    #[error("button id {0} is registered more than once")]
    DuplicateButton(u16),

    #[error("modal id {0} is registered more than once")]
    DuplicateModal(u16),

    #[error("handler id {0} cannot be carried in a custom id")]
    InvalidHandlerId(u16),

    #[error("command \"{command}\" declares argument \"{argument}\" more than once")]
    DuplicateArgument {
        command: Box<str>,
        argument: Box<str>,
    },

    #[error("argument \"{argument}\" of command \"{command}\" is {kind} and cannot autocomplete")]
    UnsupportedAutocomplete {
        command: Box<str>,
        argument: Box<str>,
        kind: ApplicationCommandOptionType,
    },

    #[error("command \"{0}\" cannot acknowledge with a deferred message update")]
    CommandCannotDeferUpdate(Box<str>),

    #[error("{kind:?} command \"{command}\" cannot declare arguments")]
    ArgumentsOnContextMenu {
        command: Box<str>,
        kind: ApplicationCommandType,
    },
}

/// The configured application public key cannot be used to verify requests.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid ed25519 public key: {0}")]
pub struct InvalidPublicKey(pub String);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CustomIdError {
    #[error("handler id {0} cannot be carried in a custom id")]
    InvalidHandlerId(u16),

    #[error("custom id is {0} characters long, the limit is 100")]
    TooLong(usize),
}

/// Identifies which reply rule a handler broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    CommandInteractionCannotDeferUpdate,
    CommandInteractionCannotUpdate,
    ModalSubmitInteractionCannotShowModal,
    AutocompleteInteractionCannotReply,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::CommandInteractionCannotDeferUpdate => {
                "Command interactions cannot use defer_update, maybe you meant to use defer_reply"
            }
            ErrorCode::CommandInteractionCannotUpdate => {
                "Command interactions cannot use update, maybe you meant to use reply"
            }
            ErrorCode::ModalSubmitInteractionCannotShowModal => {
                "Modal submit interactions cannot use show_modal"
            }
            ErrorCode::AutocompleteInteractionCannotReply => {
                "Autocomplete interactions can only respond with choices"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A reply method was called on an interaction kind that does not allow it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{} [{code}]", .code.message())]
pub struct ContractViolation {
    pub code: ErrorCode,
}

impl From<ErrorCode> for ContractViolation {
    fn from(code: ErrorCode) -> Self {
        ContractViolation { code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::InvalidSignature.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::UnknownButton(7).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::MissingArgument(Box::from("text")).status_code(),
            StatusCode::BAD_REQUEST
        );

        let handler = Error::Handler {
            label: "command ping".to_owned(),
            error: anyhow::anyhow!("boom"),
        };
        assert_eq!(handler.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_serializes_as_string() {
        let json = serde_json::to_string(&Error::UnknownModal(3)).unwrap();
        assert_eq!(json, r#""no modal registered with id 3""#);
    }

    #[test]
    fn test_contract_violation_display() {
        let violation = ContractViolation::from(ErrorCode::ModalSubmitInteractionCannotShowModal);
        assert_eq!(
            violation.to_string(),
            "Modal submit interactions cannot use show_modal [ModalSubmitInteractionCannotShowModal]"
        );
    }
}
