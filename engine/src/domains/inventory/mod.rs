pub use domain::*;
pub use operations::*;
pub use queries::*;

mod domain;
mod operations;
mod queries;
