//! Test driver for matchopt integration tests.
//!
//! A small tmpfs-style mount-option parser built on the matchopt engine,
//! the way a filesystem would embed it: one static-shaped token table,
//! comma splitting done here (the engine matches single `token=value`
//! strings only), captures converted with the numeric helpers.

use matchopt::{MatchArgs, ParseError, TokenTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    ReadOnly,
    ReadWrite,
    Size,
    Mode,
    Uid,
    Gid,
    Err,
}

fn option_table() -> TokenTable<Opt> {
    TokenTable::builder()
        .token("ro", Opt::ReadOnly)
        .token("rw", Opt::ReadWrite)
        .token("size=%u", Opt::Size)
        .token("mode=%o", Opt::Mode)
        .token("uid=%u", Opt::Uid)
        .token("gid=%u", Opt::Gid)
        .fallback(Opt::Err)
}

/// Parsed mount configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MountConfig {
    pub read_only: bool,
    pub size: Option<i32>,
    pub mode: Option<i32>,
    pub uid: Option<i32>,
    pub gid: Option<i32>,
}

/// Why a mount-option line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No table entry matched this option.
    UnknownOption(String),
    /// An argument did not convert to a number in range.
    BadValue(String, ParseError),
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::UnknownOption(opt) => write!(f, "unknown option: {}", opt),
            MountError::BadValue(opt, e) => write!(f, "bad value for {}: {}", opt, e),
        }
    }
}

impl std::error::Error for MountError {}

fn int_arg(opt: &str, args: &MatchArgs<'_>) -> Result<i32, MountError> {
    let arg = args.get(0).expect("capturing pattern produced no capture");
    arg.parse_int()
        .map_err(|e| MountError::BadValue(opt.to_string(), e))
}

/// Parse a comma-separated mount-option line, e.g. `size=4096,mode=755,ro`.
pub fn parse_options(line: &str) -> Result<MountConfig, MountError> {
    let table = option_table();
    let mut config = MountConfig::default();

    for opt in line.split(',') {
        if opt.is_empty() {
            continue;
        }
        let (token, args) = table.match_token(opt);
        match token {
            Opt::ReadOnly => config.read_only = true,
            Opt::ReadWrite => config.read_only = false,
            Opt::Size => config.size = Some(int_arg(opt, &args)?),
            Opt::Mode => {
                let arg = args.get(0).expect("mode pattern captures one value");
                let mode = arg
                    .parse_octal()
                    .map_err(|e| MountError::BadValue(opt.to_string(), e))?;
                config.mode = Some(mode);
            }
            Opt::Uid => config.uid = Some(int_arg(opt, &args)?),
            Opt::Gid => config.gid = Some(int_arg(opt, &args)?),
            Opt::Err => return Err(MountError::UnknownOption(opt.to_string())),
        }
    }
    Ok(config)
}
