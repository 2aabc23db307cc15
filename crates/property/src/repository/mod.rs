mod command;
mod query;
mod store;

pub use self::command::PropertyCommandRepository;
pub use self::query::PropertyQueryRepository;
pub use self::store::{PropertyStore, SharedPropertyStore};
