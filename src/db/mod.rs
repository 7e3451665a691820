pub mod catalog_service;
pub mod invoice;
pub mod item;
pub mod merchant;
