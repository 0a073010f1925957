pub use get_workstation::*;

mod get_workstation;
