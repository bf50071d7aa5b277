pub mod help_legend;
pub mod list_item;
pub mod list_viewer;
pub mod scroll_view;
pub mod spinner;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod text_input_test;
