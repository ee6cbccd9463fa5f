pub mod bounds;
pub mod transform;
pub mod types;

pub use bounds::{Bounds, ClampedTransform, clamp_transform};
pub use transform::Transform;
pub use types::SurfaceGeometry;
