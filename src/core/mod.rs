pub mod aggregate;
pub mod config;
pub mod filter;
pub mod finalize;
pub mod pipeline;
pub mod pivot;
pub mod transform;

pub use finalize::Finalizer;
pub use pipeline::Summary;
pub use transform::TransformLogic;
