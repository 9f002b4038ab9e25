pub mod config;
pub mod feed_builder;
pub mod logger;
mod post;
mod post_list;
mod test_data;
mod text_utils;
mod view;
