pub mod api_utils;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod image_input;
