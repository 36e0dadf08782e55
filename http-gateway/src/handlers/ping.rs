use super::PING_AGAIN_BUTTON;
use interactions::{
    custom_id, Arguments, Button, Command, CommandInteraction, ComponentInteraction, Reply, Runner,
};
use model::interaction::{
    ActionRow, Button as ButtonComponent, ButtonStyle, InteractionCallbackData,
};

pub fn command() -> Command {
    Command::new("ping", "Check that the bot is responding", Runner::immediate(ping))
}

pub fn button() -> Button {
    Button::new(PING_AGAIN_BUTTON, Runner::immediate(ping_again))
}

async fn ping(interaction: CommandInteraction, _: Arguments) -> anyhow::Result<Reply> {
    Ok(interaction.reply(message(1)?)?)
}

/// The click count rides along in the button's custom id.
async fn ping_again(interaction: ComponentInteraction, data: String) -> anyhow::Result<Reply> {
    let count: u32 = data.parse().unwrap_or(1);
    Ok(interaction.update(message(count + 1)?)?)
}

fn message(count: u32) -> anyhow::Result<InteractionCallbackData> {
    let button = ButtonComponent::new(
        ButtonStyle::Secondary,
        custom_id::encode(PING_AGAIN_BUTTON, &count.to_string())?,
    )
    .label("Ping again");

    Ok(InteractionCallbackData::new()
        .content(format!("Pong! ({})", count))
        .component(ActionRow::new(vec![button.into()])))
}
