//! One component per screen. Each view loads its own data through
//! [`use_page_load`](crate::load::use_page_load) and shows a spinner until it arrives.

mod contact;
mod home;
mod product_detail;
mod products;

pub use contact::{Contact, ContactDetails};
pub use home::{CompanyOverview, Home};
pub use product_detail::{ProductDetail, ProductSheet};
pub use products::{CatalogView, Products};
