pub use get_store::*;

mod get_store;
