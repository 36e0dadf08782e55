use interactions::{Arguments, Command, CommandInteraction, File, MessagePayload, Runner};
use model::interaction::InteractionCallbackData;
use serde_json::json;
use tracing::debug;

pub fn command() -> Command {
    Command::new(
        "report",
        "Generate a report about this channel",
        Runner::deferred_reply(report),
    )
}

/// Runs after the "thinking" acknowledgement, so it can take as long as the
/// interaction token lives.
async fn report(interaction: CommandInteraction, _: Arguments) -> anyhow::Result<()> {
    let report = json!({
        "interaction_id": interaction.id,
        "guild_id": interaction.guild_id,
        "channel_id": interaction.channel_id,
        "user_id": interaction.user_id(),
        "locale": interaction.locale,
    });

    let file = File::new("report.json", serde_json::to_vec_pretty(&report)?)
        .description("Channel report");
    let payload =
        MessagePayload::new(InteractionCallbackData::new().content("Here is your report.")).file(file);

    let message = interaction.edit_reply(payload, None).await?;
    debug!(message_id = %message.id, "Report delivered");

    Ok(())
}
