use crate::appender::{Command, LogAppender, LogRecord};
use crate::error::LogError;
use std::io::Write;

/// print formated records to stdout
pub struct ConsoleAppender {}

impl LogAppender for ConsoleAppender {
    fn do_logs(&self, records: &[LogRecord]) -> Result<(), LogError> {
        if records.is_empty() {
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        for x in records {
            if matches!(x.command, Command::CommandRecord) {
                out.write_all(x.formated.as_bytes())?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), LogError> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
