pub mod find_all;
pub mod items;
pub mod list;
pub mod show;
