pub mod background;
pub mod cut;
pub mod edge_strength;
pub mod feather;
pub mod matte;
pub mod padding;
pub mod pixel_buffer;
pub mod resize;
