pub mod commands;
pub mod components;
pub mod events;
pub mod keymap;
pub mod pages;
pub mod registry;
pub mod renderer;

#[cfg(test)]
mod registry_test;
