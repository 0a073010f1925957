pub use commands::*;
pub use domain::*;
pub use queries::*;
pub use update::*;

mod commands;
mod domain;
mod queries;
mod update;
