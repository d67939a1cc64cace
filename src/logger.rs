use crate::appender::{Command, LogAppender, LogRecord, RecordFormat};
use crate::config::Config;
use crate::error::LogError;
use crate::runtime::{chan, spawn, JoinHandle, Receiver, Sender, WaitGroup};
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::Arc;

static LOGGER: OnceCell<&'static Logger> = OnceCell::new();

/// the logging service: sends records to a worker thread which formats
/// them and hands them to the sink of its `Config`
pub struct Logger {
    level: LevelFilter,
    send: Sender<LogRecord>,
    worker: Mutex<Option<JoinHandle<()>>>,
    error: Arc<Mutex<Option<LogError>>>,
}

impl Logger {
    /// a standalone logger, not installed as the `log` crate's global logger
    pub fn new(mut config: Config) -> Result<Self, LogError> {
        let sink = config
            .sink
            .take()
            .ok_or_else(|| LogError::from("[hello_log] sink can not be empty!"))?;
        let level = config.level;
        let (send, recv) = chan(config.chan_len);
        let error = Arc::new(Mutex::new(None));
        let worker = {
            let error = error.clone();
            spawn("hello_log", move || {
                work(sink.as_ref(), config.format.as_ref(), recv, &error)
            })?
        };
        Ok(Self {
            level,
            send,
            worker: Mutex::new(Some(worker)),
            error,
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// the first error the sink returned since the last call.
    /// Call after `flush` to see failures of earlier records
    pub fn take_error(&self) -> Option<LogError> {
        self.error.lock().take()
    }

    /// write everything queued, then stop the worker.
    /// records logged after exit are dropped
    pub fn exit(&self) -> Result<(), LogError> {
        let worker = self.worker.lock().take();
        if let Some(worker) = worker {
            self.send.send(LogRecord::command(Command::CommandExit))?;
            worker
                .join()
                .map_err(|_| LogError::from("[hello_log] worker thread panicked"))?;
        }
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = self.send.send(LogRecord::from_record(record));
        }
    }

    /// blocks until every record sent before this call is written
    fn flush(&self) {
        let wg = WaitGroup::new();
        let cmd = LogRecord::command(Command::CommandFlush(wg.clone()));
        if self.send.send(cmd).is_ok() {
            wg.wait();
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

fn work(
    sink: &dyn LogAppender,
    format: &dyn RecordFormat,
    recv: Receiver<LogRecord>,
    error: &Mutex<Option<LogError>>,
) {
    loop {
        let first = match recv.recv() {
            Ok(v) => v,
            Err(_) => break,
        };
        let mut remain = Vec::with_capacity(recv.len() + 1);
        remain.push(first);
        remain.extend(recv.try_iter());

        let mut records = Vec::with_capacity(remain.len());
        for mut x in remain {
            match x.command {
                Command::CommandRecord => {
                    format.do_format(&mut x);
                    records.push(x);
                }
                Command::CommandFlush(_) => {
                    do_logs(sink, &records, error);
                    records.clear();
                    keep_error(error, sink.flush());
                    // dropping x releases the WaitGroup
                }
                Command::CommandExit => {
                    do_logs(sink, &records, error);
                    keep_error(error, sink.flush());
                    return;
                }
            }
        }
        do_logs(sink, &records, error);
    }
}

fn do_logs(sink: &dyn LogAppender, records: &[LogRecord], error: &Mutex<Option<LogError>>) {
    if records.is_empty() {
        return;
    }
    keep_error(error, sink.do_logs(records));
}

/// print the failure to stderr, keep the first one for `take_error`
fn keep_error(error: &Mutex<Option<LogError>>, result: Result<(), LogError>) {
    if let Err(e) = result {
        eprintln!("[hello_log] sink error: {}", e);
        let mut lock = error.lock();
        if lock.is_none() {
            *lock = Some(e);
        }
    }
}

/// build a logger from `config` and install it as the global `log` logger.
/// Succeeds once per process. When another logger is already installed the
/// new logger's worker is stopped and its allocation is leaked
pub fn init(config: Config) -> Result<&'static Logger, LogError> {
    let logger: &'static Logger = Box::leak(Box::new(Logger::new(config)?));
    if let Err(e) = log::set_logger(logger) {
        let _ = logger.exit();
        return Err(e.into());
    }
    log::set_max_level(logger.level());
    let _ = LOGGER.set(logger);
    Ok(logger)
}

/// the logger installed by `init`, if any
pub fn logger() -> Option<&'static Logger> {
    LOGGER.get().copied()
}
