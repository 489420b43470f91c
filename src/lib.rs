#![warn(clippy::pedantic)]
//! Building blocks for a short sequence of OpenGL scenes: colored triangles,
//! a double-textured square, and Phong-lit cubes behind a first-person fly
//! camera. The scene scripts themselves live in `src/bin`.

pub mod camera;
pub mod frame;
pub mod geometry;
pub mod input;
pub mod shader;
pub mod texture;
pub mod uniforms;
