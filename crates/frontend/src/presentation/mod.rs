//! Terminal presentation components used by the client.
pub mod draw;
pub mod frame_loop;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use draw::{Draw, Projection};
pub use frame_loop::FrameLoop;
