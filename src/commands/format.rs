use std::fs::File;
use std::io::Write as _;
use std::path::PathBuf;

use bytes::Bytes;
use clap::builder::ValueParser;
use domain::base::Name;
use tracing::{debug, info};

use crate::env::Env;
use crate::error::{Context, Error};
use crate::parse::parse_name;
use crate::zone::{find_soa, load_records, render};

//------------ Constants -----------------------------------------------------

/// The `$TTL` used if neither given nor taken from an SOA record.
const DEFAULT_TTL: u32 = 3600;

//------------ Format --------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub struct Format {
    /// Origin for the zone [default: owner of the SOA record]
    ///
    /// Also used for relative names in zone files without $ORIGIN.
    #[arg(
        short = 'o',
        long = "origin",
        value_name = "domain",
        value_parser = ValueParser::new(parse_name)
    )]
    origin: Option<Name<Bytes>>,

    /// TTL to declare with $TTL [default: TTL of the SOA record, or 3600]
    #[arg(short = 't', long = "ttl", value_name = "seconds")]
    default_ttl: Option<u32>,

    /// Output zone to file [default: stdout]
    ///
    /// Use '-f -' to output to stdout.
    #[arg(short = 'f', long = "out-file", value_name = "file")]
    out_file: Option<PathBuf>,

    /// The zone file to format
    #[arg(value_name = "zonefile")]
    zonefile: PathBuf,
}

impl Format {
    pub fn execute(self, env: impl Env) -> Result<(), Error> {
        let file = File::open(env.in_cwd(&self.zonefile))
            .map_err(|e| Error::from(format!("open failed: {e}")))
            .with_context(|| {
                format!(
                    "loading zone file from path '{}'",
                    self.zonefile.display()
                )
            })?;
        let records = load_records(file, self.origin.clone()).with_context(|| {
            format!("reading zone file '{}'", self.zonefile.display())
        })?;

        let soa = find_soa(&records);
        let origin = match (&self.origin, soa) {
            (Some(origin), _) => origin.fmt_with_dot().to_string(),
            (None, Some(soa)) => soa.owner().fmt_with_dot().to_string(),
            (None, None) => crate::bail!(
                "Cannot determine the origin of '{}': no SOA record found, use -o to set it",
                self.zonefile.display()
            ),
        };
        let default_ttl = self
            .default_ttl
            .or_else(|| soa.map(|soa| soa.ttl().as_secs()))
            .unwrap_or(DEFAULT_TTL);

        info!("Formatting zone {origin} with default TTL {default_ttl}");
        let text = render(&records, &origin, default_ttl)?;

        match &self.out_file {
            Some(path) if path.as_os_str() != "-" => {
                debug!("Writing zone to {}", path.display());
                let mut out_file = File::create(env.in_cwd(path))
                    .map_err(|e| format!("Could not create file \"{}\": {e}", path.display()))?;
                out_file
                    .write_all(text.as_bytes())
                    .map_err(|e| format!("Could not write to file \"{}\": {e}", path.display()))?;
            }
            _ => write!(env.stdout(), "{text}"),
        }

        Ok(())
    }
}

//============ Tests =========================================================
