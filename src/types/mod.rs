pub mod error;
pub mod invoice;
pub mod item;
pub mod merchant;
pub mod resource;
pub mod response;
