//! Saving and restoring the puzzle between sessions.
//!
//! The puzzle is stored as RON under a single key of the eframe storage. A
//! stored value that fails to parse or validate is discarded and the app
//! starts a fresh game.

pub(crate) mod dto;
pub(crate) mod storage;
