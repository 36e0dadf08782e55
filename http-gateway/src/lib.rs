mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod handlers;
pub mod http;
pub mod observability;

mod tasks;
pub use tasks::BackgroundTasks;
