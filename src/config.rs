use crate::appender::{LogAppender, RecordFormat};
use crate::formats::TextFormat;
use crate::plugin::console::ConsoleAppender;
use log::LevelFilter;
use std::fmt::{Debug, Formatter};

/// the logger Config
/// for example:
// hello_log::init(
//         Config::new().console().chan_len(Some(1000))
// )
pub struct Config {
    /// the one destination of every record, the last `console`/`custom` wins
    pub sink: Option<Box<dyn LogAppender>>,
    /// the log level filter
    pub level: LevelFilter,
    /// format record into field LogRecord's formated:String
    pub format: Box<dyn RecordFormat>,
    /// the channel length,default None(Unbounded channel)
    pub chan_len: Option<usize>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("sink", &self.sink.is_some())
            .field("level", &self.level)
            .field("chan_len", &self.chan_len)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sink: None,
            level: LevelFilter::Info,
            format: Box::new(TextFormat::new()),
            chan_len: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// set log LevelFilter
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
    /// set log format
    pub fn format<F: RecordFormat + 'static>(mut self, format: F) -> Self {
        self.format = Box::new(format);
        self
    }
    /// write to a ConsoleAppender
    pub fn console(self) -> Self {
        self.custom(ConsoleAppender {})
    }
    /// write to a custom LogAppender
    pub fn custom<Appender: LogAppender + 'static>(mut self, arg: Appender) -> Self {
        self.sink = Some(Box::new(arg));
        self
    }

    /// if none=> unbounded() channel,if Some =>  bounded(len) channel
    pub fn chan_len(mut self, len: Option<usize>) -> Self {
        self.chan_len = len;
        self
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::plugin::capture::CaptureAppender;
    use log::LevelFilter;

    #[test]
    fn test_default() {
        let c = Config::new();
        assert_eq!(c.level, LevelFilter::Info);
        assert_eq!(c.chan_len, None);
        assert!(c.sink.is_none());
    }

    #[test]
    fn test_builder() {
        let c = Config::new()
            .level(LevelFilter::Debug)
            .console()
            .chan_len(Some(16));
        assert_eq!(c.level, LevelFilter::Debug);
        assert_eq!(c.chan_len, Some(16));
        assert!(c.sink.is_some());
        assert!(format!("{:?}", c).contains("sink: true"));
    }

    #[test]
    fn test_last_sink_wins() {
        let first = CaptureAppender::new();
        let second = CaptureAppender::new();
        let logger = crate::Logger::new(
            Config::new()
                .custom(first.clone())
                .custom(second.clone()),
        )
        .unwrap();
        crate::app::run(&logger);
        log::Log::flush(&logger);
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }
}
