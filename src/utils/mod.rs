pub mod open;
pub mod path;
pub mod time;
