
use super::command::Command;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseErr {
    EmptyLine,
    UnknownCommand(String),
}

/// Maps a menu answer to a command. Case and surrounding whitespace are
/// ignored; anything but a single known letter is rejected.
pub fn parse(input: &str) -> Result<Command, ParseErr> {
    let choice = input.trim().to_lowercase();
    match choice.as_str() {
        "" => Err(ParseErr::EmptyLine),
        "l" => Ok(Command::Load),
        "a" => Ok(Command::Add),
        "i" => Ok(Command::Display),
        "d" => Ok(Command::Delete),
        "s" => Ok(Command::Save),
        "x" => Ok(Command::Exit),
        _ => Err(ParseErr::UnknownCommand(choice)),
    }
}
