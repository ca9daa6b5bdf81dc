pub mod bubble;
pub mod interaction;
pub mod movement;
pub mod render;
pub mod text;
#[cfg(feature = "vectors")]
pub mod vector;
