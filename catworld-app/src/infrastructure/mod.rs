pub mod config;
pub mod the_cat_api;
