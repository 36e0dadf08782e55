use interactions::{Argument, Arguments, Command, CommandInteraction, Reply, Runner};
use model::channel::message::AllowedMentions;
use model::interaction::{ApplicationCommandOptionType, InteractionCallbackData};

pub fn command() -> Command {
    Command::new("say", "Make the bot say something", Runner::immediate(say))
        .owner_only()
        .argument(
            Argument::new("message", "What to say", ApplicationCommandOptionType::String)
                .required(),
        )
}

async fn say(interaction: CommandInteraction, args: Arguments) -> anyhow::Result<Reply> {
    let data = InteractionCallbackData::new()
        .content(args.string("message").unwrap_or_default())
        .allowed_mentions(AllowedMentions::none());

    Ok(interaction.reply(data)?)
}
