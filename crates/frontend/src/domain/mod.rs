pub mod categories;
pub mod exhibitions;
pub mod industries;
pub mod products;
pub mod slider_images;
pub mod team_members;
