pub mod post_card;
pub mod post_menu;

pub use post_card::PostCard;
pub use post_menu::PostMenu;
