pub mod core;
pub mod impl_gui;
pub mod label;
pub mod main;
pub mod render;
pub mod run_effect;

#[cfg(test)]
mod tests;
