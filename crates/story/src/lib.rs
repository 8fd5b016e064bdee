pub mod app_menus;
pub mod buttons;
pub mod content;
pub mod flat_tree;
pub mod gallery;
pub mod themes;
pub mod tree;
