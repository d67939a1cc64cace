use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crossbeam_channel::SendError;
use log::SetLoggerError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogError {
    E(String),
}

impl From<&str> for LogError {
    fn from(arg: &str) -> Self {
        LogError::E(arg.to_string())
    }
}

impl From<String> for LogError {
    fn from(arg: String) -> Self {
        LogError::E(arg)
    }
}

impl From<SetLoggerError> for LogError {
    fn from(arg: SetLoggerError) -> Self {
        LogError::E(arg.to_string())
    }
}

impl From<std::io::Error> for LogError {
    fn from(arg: std::io::Error) -> Self {
        LogError::E(arg.to_string())
    }
}

impl<T> From<SendError<T>> for LogError {
    fn from(arg: SendError<T>) -> Self {
        LogError::E(arg.to_string())
    }
}

impl Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LogError::E(err) => write!(f, "hello_log error: {}", err),
        }
    }
}

impl Error for LogError {}
