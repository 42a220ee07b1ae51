pub mod gltf_loader_utils;
pub mod math;
