use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Maps the verbosity of the configuration onto a log level.
pub fn log_level(verbose: i8) -> LevelFilter {
    match verbose {
        2 => LevelFilter::Trace,
        1 => LevelFilter::Debug,
        0 => LevelFilter::Info,
        -1 => LevelFilter::Warn,
        -2 => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Builds the global logger that prints only the plain messages. Returns false if a
/// logger was already set, e.g. by the application that uses this library.
pub fn init_logger(verbose: i8) -> bool {
    Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log_level(verbose))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_to_level() {
        assert_eq!(log_level(2), LevelFilter::Trace);
        assert_eq!(log_level(0), LevelFilter::Info);
        assert_eq!(log_level(-2), LevelFilter::Error);
        assert_eq!(log_level(7), LevelFilter::Info);
    }

    #[test]
    fn logger_is_only_set_once() {
        init_logger(1);
        assert!(!init_logger(0));
    }
}
