//! Line-oriented console front end

pub mod command;
pub mod session;

pub use command::{parse_command, Command, QUIT_KEYWORD};
pub use session::{Outcome, Session};
