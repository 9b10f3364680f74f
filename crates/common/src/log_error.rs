use std::fmt::Display;

/// Log the error of a result and pass the result on unchanged
pub trait LogError {
    fn log_error_msg(&self, msg: &str) -> &Self;
}

impl<T, E> LogError for Result<T, E>
where
    E: Display,
{
    fn log_error_msg(&self, msg: &str) -> &Self {
        if let Err(e) = self {
            log::error!("{msg}: {e}")
        }
        self
    }
}
