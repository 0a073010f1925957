pub use create_workstation::*;
pub use destroy_workstation::*;

mod create_workstation;
mod destroy_workstation;
