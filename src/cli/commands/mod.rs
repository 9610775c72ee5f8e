pub mod cancel;
pub mod config;
pub mod init;
pub mod log;
pub mod recent;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;
