//! Classic snake on a toroidal grid, rendered in the terminal.
//!
//! The board is a fixed 640×480 logical-pixel surface divided into 20-px
//! cells; leaving one edge re-enters from the opposite one. Eating grows
//! the snake by one cell, self-collision resets it to a single cell at the
//! board center. The binary in `main.rs` owns the terminal session and the
//! fixed-rate game loop; everything here is plain, synchronous state.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
