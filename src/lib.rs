//! **tilemaze** is a tile based maze generation and navigation library.
//!
//! A maze is a grid of tile states: walls, open passages and one exit. The
//! `generators` module grows a perfect maze over such a grid, `grid` answers
//! the adjacency queries a movement layer needs, `player` holds the movable
//! position, and `renderers` writes picture snapshots.

pub mod generators;
pub mod grid;
pub mod player;
pub mod renderers;
pub mod tiles;
pub mod units;
mod utils;
