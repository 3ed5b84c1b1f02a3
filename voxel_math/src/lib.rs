//! Core library for world-space vector math in a voxel world.

pub mod io;
pub mod position;
pub mod vector;
