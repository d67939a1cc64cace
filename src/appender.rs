use crate::error::LogError;
use crate::runtime::WaitGroup;
use std::time::SystemTime;

/// LogAppender append logs
/// Appender will be running on the logger's worker thread
pub trait LogAppender: Send {
    /// Batch write log, or do nothing
    fn do_logs(&self, records: &[LogRecord]) -> Result<(), LogError>;

    /// flush or do nothing
    fn flush(&self) -> Result<(), LogError> {
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub enum Command {
    CommandRecord,
    CommandExit,
    /// Flush the sink, then release the WaitGroup
    CommandFlush(WaitGroup),
}

#[derive(Clone, Debug)]
pub struct LogRecord {
    pub command: Command,
    pub level: log::Level,
    pub target: String,
    pub args: String,
    pub module_path: String,
    pub file: String,
    pub line: Option<u32>,
    pub now: SystemTime,
    pub formated: String,
}

impl LogRecord {
    pub fn from_record(record: &log::Record) -> Self {
        Self {
            command: Command::CommandRecord,
            level: record.level(),
            target: record.target().to_string(),
            args: record.args().to_string(),
            module_path: record.module_path().unwrap_or_default().to_string(),
            file: record.file().unwrap_or_default().to_string(),
            line: record.line(),
            now: SystemTime::now(),
            formated: String::new(),
        }
    }

    /// a control message, carries no log data
    pub fn command(command: Command) -> Self {
        Self {
            command,
            level: log::Level::Info,
            target: String::new(),
            args: String::new(),
            module_path: String::new(),
            file: String::new(),
            line: None,
            now: SystemTime::now(),
            formated: String::new(),
        }
    }
}

/// format record data
pub trait RecordFormat: Send + Sync {
    fn do_format(&self, arg: &mut LogRecord);
}

#[cfg(test)]
mod test {
    use super::{Command, LogRecord};
    use log::Level;

    #[test]
    fn test_from_record() {
        let r = LogRecord::from_record(
            &log::Record::builder()
                .args(format_args!("Hello, world!"))
                .level(Level::Info)
                .target("hello_log::app")
                .module_path(Some("hello_log::app"))
                .file(Some("src/app.rs"))
                .line(Some(7))
                .build(),
        );
        assert!(matches!(r.command, Command::CommandRecord));
        assert_eq!(r.level, Level::Info);
        assert_eq!(r.args, "Hello, world!");
        assert_eq!(r.module_path, "hello_log::app");
        assert_eq!(r.line, Some(7));
        assert!(r.formated.is_empty());
    }
}
