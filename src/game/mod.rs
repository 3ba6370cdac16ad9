pub mod types;
pub mod observe;
pub mod store;

pub mod entities;
pub mod grid;
pub mod systems;

pub mod demo;

#[cfg(test)]
mod tests;
