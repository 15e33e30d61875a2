mod footer;
mod hero;
mod loading;
mod nav;
mod product_card;

pub use footer::Footer;
pub use hero::Hero;
pub use loading::{LoadFailed, Loading};
pub use nav::{NavLink, Navbar};
pub use product_card::{ProductCard, ProductGrid};
