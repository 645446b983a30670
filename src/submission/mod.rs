pub mod pipeline;
pub mod validate;
