pub use add_item::*;
pub use create_store::*;
pub use destroy_store::*;
pub use remove_item::*;

mod add_item;
mod create_store;
mod destroy_store;
mod remove_item;
