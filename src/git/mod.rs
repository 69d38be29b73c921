pub mod mirror;
pub mod operations;
pub mod status;

// Re-export commonly used items
pub use mirror::*;
pub use operations::*;
pub use status::*;
