pub mod core;
pub mod main;
pub mod motion;
pub mod render;
pub mod results;
pub mod run_effect;

#[cfg(test)]
mod tests;
