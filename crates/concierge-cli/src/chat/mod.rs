//! Interactive chat loop: input wiring, slash commands, terminal rendering.

mod commands;
mod input;
mod loop_runner;
mod sink;

pub use loop_runner::run_chat_loop;
