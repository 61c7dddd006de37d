pub mod search;
pub mod todo_ops;
