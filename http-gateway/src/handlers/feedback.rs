use super::FEEDBACK_MODAL;
use interactions::{
    custom_id, Arguments, Command, CommandInteraction, Modal, ModalSubmission,
    ModalSubmitInteraction, Reply, Runner,
};
use model::interaction::{Label, ModalCallbackData, TextInput, TextStyleType};
use tracing::info;

pub fn command() -> Command {
    Command::new("feedback", "Send feedback to the developers", Runner::immediate(open))
}

pub fn modal() -> Modal {
    Modal::new(FEEDBACK_MODAL, "Feedback", Runner::deferred_ephemeral(submit))
}

async fn open(interaction: CommandInteraction, _: Arguments) -> anyhow::Result<Reply> {
    let channel = interaction
        .channel_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let modal = ModalCallbackData::new(custom_id::encode(FEEDBACK_MODAL, &channel)?, "Feedback")
        .component(Label::new(
            "Subject",
            TextInput::new("subject", TextStyleType::Short),
        ))
        .component(Label::new(
            "Details",
            TextInput::new("details", TextStyleType::Paragraph),
        ));

    Ok(interaction.show_modal(modal)?)
}

async fn submit(
    interaction: ModalSubmitInteraction,
    submission: ModalSubmission,
) -> anyhow::Result<()> {
    let subject = submission.text("subject").unwrap_or_default();
    let details = submission.text("details").unwrap_or_default();

    info!(
        user_id = ?interaction.user_id(),
        channel_id = %submission.data,
        subject,
        length = details.len(),
        "Received feedback"
    );

    interaction
        .follow_up(format!("Thanks! We received your feedback about \"{}\".", subject))
        .await?;

    Ok(())
}
