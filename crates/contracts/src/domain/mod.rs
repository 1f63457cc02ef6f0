//! Record and draft types for the six catalog resources

pub mod common;

pub mod category;
pub mod exhibition;
pub mod industry;
pub mod product;
pub mod slider_image;
pub mod team_member;

pub use common::CatalogRecord;
