pub mod config;
pub mod error;
pub mod logger;
pub mod post_list;
pub mod server;
pub mod view;
mod test_data;
