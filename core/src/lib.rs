//! Tick core — the todo list model and its persistence.
//!
//! This crate holds everything that is not a surface: the [`store`] of
//! ordered todo items, the [`storage`] slot it persists into, and the
//! [`controller`] that binds the store to whatever renders it. No
//! terminal or stdin/stdout I/O happens here; prompts are injected via
//! [`controller::Prompter`] so the whole crate is testable in-process.
//!
//! # Modules
//!
//! - [`types`] — the `Item` data model
//! - [`storage`] — the single-key storage slot (file-backed or in-memory)
//! - [`store`] — the ordered, persistable item sequence
//! - [`controller`] — render contract and user-intent handlers

pub mod controller;
pub mod storage;
pub mod store;
pub mod types;
