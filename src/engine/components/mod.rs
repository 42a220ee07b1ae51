pub mod camera;
pub mod light_rig;
pub mod material;
pub mod mesh;
pub mod skeleton;
pub mod transform;

pub use camera::Camera;
pub use light_rig::LightRig;
pub use material::Material;
pub use mesh::Mesh;
pub use skeleton::{Node, Skeleton};
pub use transform::Transform;
