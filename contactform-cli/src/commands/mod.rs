pub mod batch;
pub mod submit;
pub mod validate;
