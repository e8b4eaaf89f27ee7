pub mod health;
pub mod page;

pub use health::health_handler;
pub use page::page_handler;
