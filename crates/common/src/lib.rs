mod cancel;
mod env;
mod log_error;
mod test_logger;

pub use cancel::*;
pub use env::*;
pub use log_error::*;
pub use test_logger::*;
