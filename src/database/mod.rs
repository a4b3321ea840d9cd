pub mod change_set;
pub mod pool;
pub mod store;
