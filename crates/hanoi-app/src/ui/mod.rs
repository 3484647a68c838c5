pub mod board;
pub mod confetti;
pub mod dialogs;
pub mod game_screen;
pub mod input;
pub mod palette;
pub mod sidebar;
