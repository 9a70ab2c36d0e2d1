pub mod animate;
pub mod camera;
pub mod color;
pub mod constants;
pub mod mesh;
pub mod pointer;
pub mod scene;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static SHAPES_WGSL: &str = include_str!("../shaders/shapes.wgsl");

pub use animate::*;
pub use camera::*;
pub use pointer::*;
pub use scene::*;
