pub mod interface;
pub mod upload_config;
pub mod validate;
pub mod widget;
