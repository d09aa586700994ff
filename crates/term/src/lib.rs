//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a framebuffer that is flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from a plain `GameSnapshot`, never from live game state
//! - Only redraw the glyphs that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{tile_colors, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
