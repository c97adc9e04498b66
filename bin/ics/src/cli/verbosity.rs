use std::fmt;

/// Log level selected with `--verbosity`, from 0 (off) to 5 (trace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn directive(&self) -> &'static str {
        match self {
            Verbosity::Off => "off",
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            0 => Ok(Verbosity::Off),
            1 => Ok(Verbosity::Error),
            2 => Ok(Verbosity::Warn),
            3 => Ok(Verbosity::Info),
            4 => Ok(Verbosity::Debug),
            5 => Ok(Verbosity::Trace),
            _ => Err(format!("Verbosity must be between 0 and 5, got {level}")),
        }
    }
}

pub fn verbosity_parser(verbosity_string: &str) -> Result<Verbosity, String> {
    verbosity_string
        .parse::<u8>()
        .map_err(|err| format!("Could not parse the verbosity level: {err:?}"))?
        .try_into()
}
