//! The view of a resource record used when presenting a zone.

use bytes::Bytes;
use domain::base::iana::{Class, Rtype};
use domain::base::{Name, Record};
use domain::rdata::ZoneRecordData;

use super::error::RenderError;

//------------ ZoneRecord ----------------------------------------------------

/// A record as produced by the zonefile scanner after flattening its names.
pub type ZoneRecord = Record<Name<Bytes>, ZoneRecordData<Bytes, Name<Bytes>>>;

//------------ SortKey -------------------------------------------------------

/// The type specific part of a record's display order.
///
/// Keys of the same kind compare by their value. Keys of different kinds
/// compare in the order of the variants below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// The address of an A record in network byte order.
    Address([u8; 4]),

    /// The preference of an MX record.
    Preference(u16),

    /// No type specific order.
    None,
}

//------------ PresentRecord -------------------------------------------------

/// A record that can be placed into a rendered zone.
pub trait PresentRecord {
    /// The absolute owner name, including the trailing dot.
    fn owner_fqdn(&self) -> String;

    fn ttl_secs(&self) -> u32;

    fn class(&self) -> Class;

    fn rtype(&self) -> Rtype;

    /// Returns the type specific sort key.
    ///
    /// Fails for A records whose data is not exactly four octets long.
    fn sort_key(&self) -> Result<SortKey, RenderError>;

    /// Returns the record on a single line.
    ///
    /// The line has five tab separated fields: owner, TTL, class, type and
    /// record data. A line starting with `;` is a comment.
    fn canonical_line(&self) -> String;
}

impl PresentRecord for ZoneRecord {
    fn owner_fqdn(&self) -> String {
        self.owner().fmt_with_dot().to_string()
    }

    fn ttl_secs(&self) -> u32 {
        self.ttl().as_secs()
    }

    fn class(&self) -> Class {
        Record::class(self)
    }

    fn rtype(&self) -> Rtype {
        Record::rtype(self)
    }

    fn sort_key(&self) -> Result<SortKey, RenderError> {
        match self.data() {
            ZoneRecordData::A(a) => Ok(SortKey::Address(a.addr().octets())),
            ZoneRecordData::Mx(mx) => Ok(SortKey::Preference(mx.preference())),
            // Records in the generic \# notation keep their raw data.
            ZoneRecordData::Unknown(data) if data.rtype() == Rtype::A => {
                <[u8; 4]>::try_from(data.data().as_ref())
                    .map(SortKey::Address)
                    .map_err(|_| RenderError::MalformedRecord(self.canonical_line()))
            }
            ZoneRecordData::Unknown(data) if data.rtype() == Rtype::MX => {
                match *data.data().as_ref() {
                    [hi, lo, ..] => Ok(SortKey::Preference(u16::from_be_bytes([hi, lo]))),
                    _ => Err(RenderError::MalformedRecord(self.canonical_line())),
                }
            }
            _ => Ok(SortKey::None),
        }
    }

    fn canonical_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.owner().fmt_with_dot(),
            self.ttl().as_secs(),
            Record::class(self),
            Record::rtype(self),
            self.data(),
        )
    }
}

//------------ relative_label ------------------------------------------------

/// Returns an owner name relative to the zone origin.
///
/// The origin itself becomes `@`. Names outside of the origin are returned
/// fully qualified. Both names may be given with or without the trailing
/// dot and the origin is matched ignoring ASCII case.
pub fn relative_label(owner: &str, origin: &str) -> String {
    let owner = owner.strip_suffix('.').unwrap_or(owner);
    let origin = origin.strip_suffix('.').unwrap_or(origin);

    if owner.eq_ignore_ascii_case(origin) {
        return "@".into();
    }
    if origin.is_empty() {
        return owner.into();
    }

    if owner.len() > origin.len() + 1 {
        let split = owner.len() - origin.len() - 1;
        if owner.is_char_boundary(split) {
            let (head, tail) = owner.split_at(split);
            if let Some(tail) = tail.strip_prefix('.') {
                if tail.eq_ignore_ascii_case(origin) {
                    return head.into();
                }
            }
        }
    }

    format!("{owner}.")
}

//============ Tests =========================================================
