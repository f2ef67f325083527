pub mod particle;
pub mod registry;
pub mod scene;
pub mod scheduler;
pub mod streak;
pub mod surface;

pub use particle::*;
pub use registry::*;
pub use scene::*;
pub use scheduler::*;
pub use streak::*;
pub use surface::*;
