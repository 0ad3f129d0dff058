// Page sections, top to bottom

/// In-page anchor targets.
pub const COLLECTION_ID: &str = "collection";
pub const ABOUT_ID: &str = "about";
pub const CONTACT_ID: &str = "contact";

/// Every section id rendered on the page.
pub const SECTION_IDS: &[&str] = &[COLLECTION_ID, ABOUT_ID, CONTACT_ID];

mod about;
mod collection;
mod footer;
mod hero;
mod marquee;
mod nav;
mod newsletter;

pub use about::About;
pub use collection::Collection;
pub use footer::Footer;
pub use hero::Hero;
pub use marquee::Marquee;
pub use nav::Nav;
pub use newsletter::Newsletter;
