//! Front ends: a ratatui game view and the plain console messages used by
//! headless play.

mod app;
pub mod console;
mod game_view;

pub use app::App;
