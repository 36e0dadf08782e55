use interactions::{Arguments, Command, CommandInteraction, CommandKind, Reply, Runner};
use model::interaction::{ApplicationCommandType, InteractionCallbackData};

pub fn command() -> Command {
    Command::new("Who is this?", "", Runner::immediate(whois)).kind(ApplicationCommandType::User)
}

async fn whois(interaction: CommandInteraction, _: Arguments) -> anyhow::Result<Reply> {
    let content = match &interaction.kind {
        CommandKind::UserContextMenu { target, target_member } => {
            let nick = target_member.as_ref().and_then(|m| m.nick.as_deref());
            match nick {
                Some(nick) => format!(
                    "{} ({}), known here as {}",
                    target.mention(),
                    target.id,
                    nick
                ),
                None => format!("{} ({})", target.mention(), target.id),
            }
        }
        _ => "This only works on users.".to_owned(),
    };

    Ok(interaction.reply(InteractionCallbackData::new().content(content).ephemeral())?)
}
