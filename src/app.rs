use log::{Level, Log, Record};

pub const GREETING: &str = "Hello, world!";

/// emit the greeting, once, at info level
pub fn run(log: &dyn Log) {
    log.log(
        &Record::builder()
            .args(format_args!("{}", GREETING))
            .level(Level::Info)
            .target(module_path!())
            .module_path(Some(module_path!()))
            .file(Some(file!()))
            .line(Some(line!()))
            .build(),
    );
}
