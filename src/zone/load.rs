//! Reading records from zone file text.

use std::io;

use bytes::Bytes;
use domain::base::iana::Rtype;
use domain::base::name::FlattenInto;
use domain::base::Name;
use domain::zonefile::inplace::{Entry, Zonefile};
use tracing::debug;

use crate::error::Error;

use super::record::ZoneRecord;

/// Reads all records of a zone file.
///
/// Relative names are made absolute with `origin` unless the file sets its
/// own with `$ORIGIN`. `$INCLUDE` directives are not supported.
pub fn load_records(mut read: impl io::Read, origin: Option<Name<Bytes>>) -> Result<Vec<ZoneRecord>, Error> {
    let mut reader = Zonefile::load(&mut read)?;
    if let Some(origin) = origin {
        reader.set_origin(origin);
    }

    let mut records = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|err| format!("Invalid zone file: {err}"))?;
        match entry {
            Entry::Record(record) => {
                let record: ZoneRecord = record.flatten_into();
                records.push(record);
            }
            Entry::Include { .. } => {
                return Err(Error::from(
                    "Invalid zone file: $INCLUDE directive is not supported",
                ));
            }
        }
    }

    debug!("Read {} records", records.len());
    Ok(records)
}

/// Returns the first SOA record.
pub fn find_soa(records: &[ZoneRecord]) -> Option<&ZoneRecord> {
    records.iter().find(|record| record.rtype() == Rtype::SOA)
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use domain::base::Name;

    use super::{find_soa, load_records};

    #[test]
    fn relative_names_use_origin() {
        let text = "www  300  IN  A  192.0.2.1\n";
        let origin = Name::from_str("example.com.").unwrap();
        let records = load_records(text.as_bytes(), Some(origin)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].owner().to_string(), "www.example.com");
        assert!(find_soa(&records).is_none());
    }

    #[test]
    fn relative_names_need_origin() {
        let text = "www  300  IN  A  192.0.2.1\n";
        let err = load_records(text.as_bytes(), None).unwrap_err();
        assert!(err.to_string().starts_with("Invalid zone file: "));
    }

    #[test]
    fn include_is_rejected() {
        let text = "$INCLUDE other.zone\n";
        let err = load_records(text.as_bytes(), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid zone file: $INCLUDE directive is not supported"
        );
    }

    #[test]
    fn soa_is_found() {
        let text = "\
$ORIGIN example.com.
www  300  IN  A    192.0.2.1
@    600  IN  SOA  ns1 hostmaster 1 7200 3600 1209600 300
";
        let records = load_records(text.as_bytes(), None).unwrap();
        let soa = find_soa(&records).unwrap();
        assert_eq!(soa.owner().to_string(), "example.com");
        assert_eq!(soa.ttl().as_secs(), 600);
    }
}
