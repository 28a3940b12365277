pub mod card;
pub mod glyph;
pub mod nav_link;
pub mod profile_menu;
pub mod search_field;

pub use card::Card;
pub use glyph::Glyph;
pub use nav_link::{NavItemLink, TeamLink};
pub use profile_menu::ProfileMenu;
pub use search_field::SearchField;
