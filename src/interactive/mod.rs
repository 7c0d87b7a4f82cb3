//! Full-screen self-play viewer

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, Phase, Statistics, run_tui};
