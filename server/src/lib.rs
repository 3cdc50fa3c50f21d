//! # Second Brain Server
//!
//! Captures quick notes and links from anywhere and shows them on a two-column
//! board: actions to do and reflections to keep.
//!
//! ## Endpoints
//!
//! - `POST /api/capture` - Store a capture (`Authorization: Bearer <secret>`)
//! - `GET /api/items` - All items as JSON, newest first
//! - `GET /` - The board
//! - `POST /items` - Create a task or an idea from the board
//! - `POST /items/{id}/archive` - Archive an item
//! - `GET /health` - Health check endpoint
//!
//! Every board action redirects back to `/`, which reloads the whole table
//! from the store.

pub mod board;
pub mod capture;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use error::ApiError;
pub use routes::create_router;
pub use server::BrainServer;
pub use state::AppState;
