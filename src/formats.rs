use crate::appender::{Command, LogRecord, RecordFormat};
use log::LevelFilter;

/// `{date} {LEVEL} {module_path} - {args}`, one record per line.
/// The date is the record's `SystemTime` printed in UTC
pub struct TextFormat {
    // show line level
    pub display_line_level: LevelFilter,
}

impl RecordFormat for TextFormat {
    fn do_format(&self, arg: &mut LogRecord) {
        match &arg.command {
            Command::CommandRecord => {
                let now = fastdate::DateTime::from(arg.now);
                if arg.level.to_level_filter() <= self.display_line_level {
                    arg.formated = format!(
                        "{:29} {} {} - {}  {}:{}\n",
                        &now,
                        arg.level,
                        arg.module_path,
                        arg.args,
                        arg.file,
                        arg.line.unwrap_or_default()
                    );
                } else {
                    arg.formated = format!(
                        "{:29} {} {} - {}\n",
                        &now, arg.level, arg.module_path, arg.args
                    );
                }
            }
            Command::CommandExit => {}
            Command::CommandFlush(_) => {}
        }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl TextFormat {
    pub fn new() -> TextFormat {
        Self {
            display_line_level: LevelFilter::Warn,
        }
    }

    ///show line level
    pub fn set_display_line_level(mut self, level: LevelFilter) -> Self {
        self.display_line_level = level;
        self
    }
}
