use crate::types::asset::Asset;

/// A recognized inbound chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Quote(Asset),
}

impl Command {
    /// Parses the first token of a message text. Commands are
    /// case-insensitive, require a leading `/`, and may carry the
    /// `@botname` suffix Telegram appends in group chats.
    pub fn parse(text: &str) -> Option<Command> {
        let token = text.split_whitespace().next()?;
        let token = token.strip_prefix('/')?;
        let token = token.split('@').next()?;

        if token.eq_ignore_ascii_case("start") {
            return Some(Command::Start);
        }

        token.parse::<Asset>().ok().map(Command::Quote)
    }
}
