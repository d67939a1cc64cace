use hello_log::config::Config;
use hello_log::error::LogError;
use log::Log;

fn main() -> Result<(), LogError> {
    let logger = hello_log::init(Config::new().console())?;
    hello_log::app::run(logger);
    logger.flush();
    match logger.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
