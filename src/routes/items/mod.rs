pub mod create;
pub mod delete;
pub mod find;
pub mod list;
pub mod merchant;
pub mod show;
pub mod update;
