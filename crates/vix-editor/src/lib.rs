//! # vix-editor — Editor core for vix
//!
//! This crate contains the fundamental building blocks of the editor:
//!
//! - **[`document`]** — `Document` wrapping a rope, always at least one line
//! - **[`cursor`]** — `Cursor` with the target-column model and motions
//! - **[`mode`]** — modal editing (`Normal`, `Insert`, `Command`)
//! - **[`word`]** — the `w` next-word motion
//! - **[`command`]** — the Command-mode byte accumulator
//! - **[`view`]** — viewport scrolling and the frame render pipeline
//!
//! The binary crate owns the `Editor` state struct and the key dispatch;
//! everything here is a value type operated on by that loop.

pub mod command;
pub mod cursor;
pub mod document;
pub mod mode;
pub mod view;
pub mod word;
