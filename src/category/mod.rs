pub mod table;

pub use table::{builtin, Category, CategoryTable, OutOfRange};
