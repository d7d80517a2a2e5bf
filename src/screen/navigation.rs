use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    ActiveGame,
    EndScreen,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::ActiveGame => write!(f, "active game"),
            Screen::EndScreen => write!(f, "end screen"),
        }
    }
}

/// Close a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissCommand {
    pub screen: Screen,
}

impl DismissCommand {
    pub fn end_screen() -> Self {
        Self {
            screen: Screen::EndScreen,
        }
    }
}

/// Open a screen, then dismiss the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationCommand {
    pub open: Screen,
    pub then_dismiss: DismissCommand,
}

impl NavigationCommand {
    pub fn start_game() -> Self {
        Self {
            open: Screen::ActiveGame,
            then_dismiss: DismissCommand::end_screen(),
        }
    }
}
