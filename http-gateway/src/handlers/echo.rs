use interactions::{
    Argument, Arguments, AutocompleteInteraction, Command, CommandInteraction, Reply, Runner,
};
use model::interaction::{ApplicationCommandOptionChoice, ApplicationCommandOptionType};

const MAX_TIMES: i64 = 5;

const SUGGESTIONS: &[&str] = &["hello", "hello world", "help", "goodbye"];

pub fn command() -> Command {
    Command::new("echo", "Repeat a message", Runner::immediate(echo))
        .argument(
            Argument::new(
                "text",
                "The message to repeat",
                ApplicationCommandOptionType::String,
            )
            .required()
            .autocomplete(suggest),
        )
        .argument(Argument::new(
            "times",
            "How many times to repeat it",
            ApplicationCommandOptionType::Integer,
        ))
}

async fn echo(interaction: CommandInteraction, args: Arguments) -> anyhow::Result<Reply> {
    let text = args.string("text").unwrap_or_default();
    let times = args.integer("times").unwrap_or(1).clamp(1, MAX_TIMES) as usize;

    let content = vec![text; times].join(" ");
    Ok(interaction.reply(content)?)
}

async fn suggest(
    _: AutocompleteInteraction,
    current: String,
) -> anyhow::Result<Vec<ApplicationCommandOptionChoice>> {
    let current = current.to_lowercase();

    Ok(SUGGESTIONS
        .iter()
        .filter(|s| s.starts_with(&current))
        .map(|s| ApplicationCommandOptionChoice::new(*s, *s))
        .collect())
}
