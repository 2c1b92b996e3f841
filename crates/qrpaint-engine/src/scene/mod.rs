//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic solid-rect commands in paint order
//! - turn a module matrix into one command per module under a [`TileRule`]
//!
//! [`TileRule`]: crate::coords::TileRule

mod cmd;
mod list;

pub use cmd::RectCmd;
pub use list::DrawList;
