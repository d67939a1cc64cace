use crate::appender::{Command, LogAppender, LogRecord};
use crate::error::LogError;
use parking_lot::Mutex;
use std::sync::Arc;

/// keeps every record in memory, clones share the same buffer.
/// Hand one clone to `Config::custom` and read the other
#[derive(Clone, Debug, Default)]
pub struct CaptureAppender {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl CaptureAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// a snapshot of the captured records
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// formated lines, in arrival order
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|x| x.formated.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogAppender for CaptureAppender {
    fn do_logs(&self, records: &[LogRecord]) -> Result<(), LogError> {
        let mut lock = self.records.lock();
        for x in records {
            if matches!(x.command, Command::CommandRecord) {
                lock.push(x.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::CaptureAppender;
    use crate::appender::{Command, LogAppender, LogRecord};

    #[test]
    fn test_skip_commands() {
        let capture = CaptureAppender::new();
        let mut record = LogRecord::command(Command::CommandRecord);
        record.args = "a".to_string();
        capture
            .clone()
            .do_logs(&[record, LogRecord::command(Command::CommandExit)])
            .unwrap();
        assert_eq!(capture.len(), 1);
        assert_eq!(capture.records()[0].args, "a");
    }
}
