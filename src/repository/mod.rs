pub mod database;
pub mod store;

#[cfg(test)]
pub mod memory;
