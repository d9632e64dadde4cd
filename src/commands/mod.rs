//! The commands of _prettyzone_.
pub mod format;

use crate::env::Env;

use super::error::Error;

#[derive(Clone, Debug, clap::Subcommand)]
pub enum Command {
    /// Print a zone file sorted and aligned for humans
    ///
    /// Records are grouped by owner name with subdomains following their
    /// parent. Within a name SOA and NS records come first, MX records are
    /// ordered by preference and A records by address. Repeated owner names
    /// are left blank and TTLs equal to the default are left out.
    #[command(name = "format")]
    Format(self::format::Format),
}

impl Command {
    pub fn execute(self, env: impl Env) -> Result<(), Error> {
        match self {
            Self::Format(format) => format.execute(env),
        }
    }
}
