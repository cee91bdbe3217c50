pub mod bounded_stack;
pub mod slot;
