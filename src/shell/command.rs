
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl Command {
    /// Menu order.
    pub const ALL: [Command; 6] = [
        Command::Load,
        Command::Add,
        Command::Display,
        Command::Delete,
        Command::Save,
        Command::Exit,
    ];

    pub fn key(&self) -> char {
        match self {
            Command::Load => 'l',
            Command::Add => 'a',
            Command::Display => 'i',
            Command::Delete => 'd',
            Command::Save => 's',
            Command::Exit => 'x',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Load => "load Inventory from file",
            Command::Add => "Add CD",
            Command::Display => "Display Current Inventory",
            Command::Delete => "delete CD from Inventory",
            Command::Save => "Save Inventory to file",
            Command::Exit => "exit",
        }
    }
}

pub fn menu() -> String {
    let mut text = String::from("Menu\n\n");
    for command in Command::ALL {
        text.push_str(&format!("[{}] {}\n", command.key(), command.label()));
    }
    text
}

pub fn choice_prompt() -> String {
    let (last, rest) = (Command::ALL[Command::ALL.len() - 1], &Command::ALL[..Command::ALL.len() - 1]);
    let rest: Vec<String> = rest.iter().map(|c| c.key().to_string()).collect();
    format!("Which operation would you like to perform? [{} or {}]: ", rest.join(", "), last.key())
}
