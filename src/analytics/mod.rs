pub mod currency;
pub mod mock;
pub mod service;
pub mod types;
pub mod window;
