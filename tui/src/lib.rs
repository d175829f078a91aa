//! Tick TUI — the terminal surface for the todo list.
//!
//! Rendering is immediate-mode ratatui; all list state lives in the
//! core controller, and all UI state (focus, selection, entry buffer)
//! lives in [`app::App`]. Blocking modal prompts implement the core's
//! `Prompter` trait so edit and clear-all run through the same handlers
//! as every other surface.
//!
//! # Modules
//!
//! - [`app`] — UI state machine and key routing (crossterm-free)
//! - [`input`] — line editor for the entry field and modal prompts
//! - [`prompt`] — blocking modal text/confirm prompts
//! - [`theme`] — styles for rows, entry, and status
//! - [`tui`] — terminal setup, event loop, frame rendering

pub mod app;
pub mod input;
pub mod prompt;
pub mod theme;
pub mod tui;
