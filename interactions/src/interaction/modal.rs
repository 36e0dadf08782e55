use super::{deref_base, InteractionBase};
use model::channel::message::Message;
use model::interaction::ModalSubmitComponent;

#[derive(Debug, Clone)]
pub struct ModalSubmitInteraction {
    pub(crate) base: InteractionBase,
    pub custom_id: Box<str>,
    pub components: Vec<ModalSubmitComponent>,
    /// Set when the modal was opened from a component on this message.
    pub message: Option<Message>,
}

deref_base!(ModalSubmitInteraction);
