mod common;
mod duration;
pub use common::{format_size, parse_size};
pub use duration::{format_duration, parse_duration};
