#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod facade;
pub mod subscriber;

mod format;
mod global;
mod level;
mod logger;
mod macros;
mod sink;

pub use facade::LogFacade;
pub use global::{log, register_custom_logger, set_log_level};
pub use level::Severity;
pub use logger::Logger;
pub use sink::SinkFn;
pub use subscriber::TagLayer;
