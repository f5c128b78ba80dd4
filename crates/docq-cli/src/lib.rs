//! Terminal chat interface for docq

mod session_log;
mod state;
mod ui;

pub use session_log::SessionLogger;
pub use state::{ChatEvent, ChatState};
pub use ui::{
    display_banner, print_help, read_question, render_answer, render_error, show_thinking,
};

// Re-export core types
pub use docq_core::{Error, Result};
