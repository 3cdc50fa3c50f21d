//! # Second Brain Core
//!
//! Shared types and traits for the second-brain capture system.
//!
//! This crate provides:
//! - The [`Item`] record stored in the hosted `items` table
//! - Closed enumerations for item type and status
//! - Content assembly for inbound captures
//! - The pure actions/reflections partition rendered by the board
//! - The [`ItemStore`] trait every store backend implements

pub mod board;
pub mod capture;
pub mod traits;
pub mod types;

pub use board::Board;
pub use capture::{CaptureRequest, DEFAULT_CAPTURE_TITLE, assemble_content, capture_title};
pub use traits::ItemStore;
pub use types::{Item, ItemId, ItemStatus, ItemType, NewItem, QuickKind};
