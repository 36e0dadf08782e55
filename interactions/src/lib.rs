mod error;
pub use error::{
    ContractViolation, CustomIdError, Error, ErrorCode, InvalidPublicKey, RegistryError, Result,
};

pub mod custom_id;

mod verify;
pub use verify::{Verifier, SIGNATURE_HEADER, TIMESTAMP_HEADER};

pub mod interaction;
pub use interaction::{
    AutocompleteInteraction, CommandInteraction, CommandKind, ComponentInteraction,
    ComponentKind, Interaction, InteractionBase, InteractionKind, ModalSubmitInteraction,
};

mod classify;
pub use classify::classify;

mod reply;
pub use reply::{File, MessagePayload, Reply};

mod response;
pub use response::Response;

mod handler;
pub use handler::{Acknowledgement, Argument, Button, Command, Modal, Runner};

mod registry;
pub use registry::Registry;

mod arguments;
pub use arguments::{ArgumentValue, Arguments};

mod fields;
pub use fields::{FieldValue, ModalSubmission};

mod dispatch;
pub use dispatch::{Dispatch, DeferredJob, OWNER_ONLY_MESSAGE};

mod rest;
pub use rest::{InteractionApi, RestClient, RestError};

mod gateway;
pub use gateway::{Gateway, Handled};
