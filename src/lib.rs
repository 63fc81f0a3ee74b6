//! hello-prompt: ask for a name in the terminal, then greet it.

pub mod tui;
