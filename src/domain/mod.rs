pub mod blog;
pub mod news;
pub mod resource;
pub mod shared;
