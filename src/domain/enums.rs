/// Input-interpretation mode gating which commands are routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adjusting,
}

/// The fixed command set dispatched from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Add,
    Submit,
    Cancel,
    ClearLog,
    Quit,
}

impl InputMode {
    /// The commands enabled in this mode, derived solely from the mode
    pub fn available_commands(&self) -> &'static [Command] {
        match self {
            InputMode::Normal => &[
                Command::Toggle,
                Command::Add,
                Command::ClearLog,
                Command::Quit,
            ],
            InputMode::Adjusting => &[Command::Submit, Command::Cancel],
        }
    }

    pub fn accepts(&self, command: Command) -> bool {
        self.available_commands().contains(&command)
    }
}
