pub mod coordinator;
pub mod end_screen;
pub mod navigation;

pub use coordinator::GameResetCoordinator;
pub use end_screen::EndScreen;
pub use navigation::{DismissCommand, NavigationCommand, Screen};
