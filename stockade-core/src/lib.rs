pub mod app_config;
pub mod money;

pub use app_config::{BusinessRules, Config};
pub use money::Cents;
