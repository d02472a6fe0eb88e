//! Product catalog and artisan directory.
//!
//! Read-only collaborator types backed by static JSON fixtures. The
//! cart only consumes `id`, `name`, `price`, and `artisan_id` from a
//! product; everything else is display data owned by the fixtures.

mod artisan;
mod product;

pub use artisan::{Artisan, ArtisanDirectory};
pub use product::{Catalog, Product};
