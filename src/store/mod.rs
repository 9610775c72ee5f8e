pub mod log;
pub mod session;

pub use log::LogStore;
pub use session::SessionStore;
