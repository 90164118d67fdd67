pub mod anchors;
pub mod errors;
pub mod keyboard;
