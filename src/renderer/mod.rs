//! WebGPU rendering module
//!
//! The scene is rebuilt from the simulation snapshot every frame as flat
//! coloured triangles in board space; the pipeline maps them to NDC.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
