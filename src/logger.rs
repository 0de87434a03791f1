//! Process logging: `log` facade backed by `log4rs`.

use std::path::Path;

use log::LevelFilter;

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;

/// error|warn|info|debug|trace, anything else is info.
#[must_use]
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initializes the logging system from a `log4rs` YAML file. As with
/// [`configure_logging`], an already installed logger stays in place.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn init_path(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = log4rs::config::load_config_file(path, log4rs::config::Deserializers::default())?;
    let _ = log4rs::init_config(config);
    Ok(())
}

/// Configure logging for the process: stderr always, plus a rolling
/// `treebench.log` under `dir` when given.
/// - level: see [`parse_level`]
/// - retention: rolled files to keep (default 3)
///
/// A logger that is already installed stays in place; the call then only
/// creates the log file.
///
/// # Errors
/// Returns an error if the log directory or file appender cannot be created.
pub fn configure_logging(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    use log4rs::append::console::{ConsoleAppender, Target};
    use log4rs::append::rolling_file::RollingFileAppender;
    use log4rs::append::rolling_file::policy::compound::{
        CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
    };
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let lvl = parse_level(level);
    let keep = u32::try_from(retention.unwrap_or(3)).unwrap_or(u32::MAX);
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();
    let mut builder =
        Config::builder().appender(Appender::builder().build("stderr", Box::new(stderr)));
    let mut root = Root::builder().appender("stderr");

    if let Some(base) = dir {
        std::fs::create_dir_all(base)?;
        let roller = FixedWindowRoller::builder()
            .build(&format!("{}", base.join("treebench.{}.log").display()), keep)?;
        let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
        let file = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(base.join("treebench.log"), Box::new(policy))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = builder.build(root.build(lvl))?;
    let _ = log4rs::init_config(config);
    Ok(())
}
