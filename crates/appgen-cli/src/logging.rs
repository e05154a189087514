// Logging and verbosity control

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global verbosity level
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

/// Verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet = 0,
    /// Normal mode - warnings and errors
    Normal = 1,
    /// Verbose mode - debug output
    Verbose = 2,
    /// Very verbose mode - trace output
    VeryVerbose = 3,
}

impl VerbosityLevel {
    /// Derive the level from `-v` occurrences and `-q`
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return VerbosityLevel::Quiet;
        }
        match verbose {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            _ => VerbosityLevel::VeryVerbose,
        }
    }

    /// Get the current verbosity level
    pub fn current() -> Self {
        match VERBOSITY.load(Ordering::Relaxed) {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Normal,
            2 => VerbosityLevel::Verbose,
            _ => VerbosityLevel::VeryVerbose,
        }
    }

    /// Set the verbosity level
    pub fn set(level: Self) {
        VERBOSITY.store(level as u8, Ordering::Relaxed);
    }

    /// Check if we should output at this level
    pub fn should_output(&self) -> bool {
        self <= &Self::current()
    }

    /// Maximum tracing level emitted at this verbosity
    pub fn tracing_level(&self) -> Level {
        match self {
            VerbosityLevel::Quiet => Level::ERROR,
            VerbosityLevel::Normal => Level::WARN,
            VerbosityLevel::Verbose => Level::DEBUG,
            VerbosityLevel::VeryVerbose => Level::TRACE,
        }
    }
}

/// Initialize logging based on CLI flags
///
/// `RUST_LOG` takes precedence over the flags when set.
pub fn init_logging(verbose: u8, quiet: bool) -> VerbosityLevel {
    let level = VerbosityLevel::from_flags(verbose, quiet);
    VerbosityLevel::set(level);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.tracing_level().to_string().to_lowercase()));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(VerbosityLevel::from_flags(0, false), VerbosityLevel::Normal);
        assert_eq!(VerbosityLevel::from_flags(1, false), VerbosityLevel::Verbose);
        assert_eq!(VerbosityLevel::from_flags(2, false), VerbosityLevel::VeryVerbose);
        assert_eq!(VerbosityLevel::from_flags(5, false), VerbosityLevel::VeryVerbose);
        assert_eq!(VerbosityLevel::from_flags(2, true), VerbosityLevel::Quiet);
    }

    #[test]
    fn test_tracing_levels() {
        assert_eq!(VerbosityLevel::Quiet.tracing_level(), Level::ERROR);
        assert_eq!(VerbosityLevel::Normal.tracing_level(), Level::WARN);
        assert_eq!(VerbosityLevel::Verbose.tracing_level(), Level::DEBUG);
        assert_eq!(VerbosityLevel::VeryVerbose.tracing_level(), Level::TRACE);
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(VerbosityLevel::Quiet < VerbosityLevel::Normal);
        assert!(VerbosityLevel::Verbose < VerbosityLevel::VeryVerbose);
    }
}
