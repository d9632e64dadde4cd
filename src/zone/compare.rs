//! The display order of records in a zone.
//!
//! Records are ordered by their owner name relative to the zone origin, then
//! by record type, then by a type specific key, and finally by their
//! single-line form. Each level is only consulted if all previous levels
//! consider two records equal. The last level makes the order total.

use core::cmp::Ordering;

use domain::base::iana::Rtype;

use super::error::RenderError;
use super::record::{relative_label, PresentRecord, SortKey};

//------------ compare -------------------------------------------------------

/// Compares two records of the zone with the given origin.
///
/// Fails if the records need to be ordered by their sort keys and the key
/// of either of them cannot be determined.
pub fn compare<R: PresentRecord>(a: &R, b: &R, origin: &str) -> Result<Ordering, RenderError> {
    let res = name_and_type_cmp(a, b, origin);
    if res != Ordering::Equal {
        return Ok(res);
    }
    Ok(key_and_line_cmp(a, a.sort_key()?, b, b.sort_key()?))
}

/// Compares two records whose sort keys have already been determined.
pub(super) fn compare_keyed<R: PresentRecord>(
    (a, a_key): (&R, SortKey),
    (b, b_key): (&R, SortKey),
    origin: &str,
) -> Ordering {
    name_and_type_cmp(a, b, origin).then_with(|| key_and_line_cmp(a, a_key, b, b_key))
}

fn name_and_type_cmp<R: PresentRecord>(a: &R, b: &R, origin: &str) -> Ordering {
    let label_a = relative_label(&a.owner_fqdn(), origin);
    let label_b = relative_label(&b.owner_fqdn(), origin);

    label_cmp(&label_a, &label_b).then_with(|| rtype_cmp(a.rtype(), b.rtype()))
}

fn key_and_line_cmp<R: PresentRecord>(a: &R, a_key: SortKey, b: &R, b_key: SortKey) -> Ordering {
    a_key
        .cmp(&b_key)
        .then_with(|| a.canonical_line().cmp(&b.canonical_line()))
}

//------------ label_cmp -----------------------------------------------------

/// Compares two relative labels.
///
/// The apex `@` goes first, the wildcard `*` second. All other labels are
/// compared component by component starting from the right. If one label
/// runs out of components first, it is the smaller one so that a name is
/// followed by the names below it.
pub fn label_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a, b) {
        ("@", _) => Ordering::Less,
        (_, "@") => Ordering::Greater,
        ("*", _) => Ordering::Less,
        (_, "*") => Ordering::Greater,
        _ => a.split('.').rev().cmp(b.split('.').rev()),
    }
}

//------------ rtype_cmp -----------------------------------------------------

/// Compares two record types.
///
/// SOA goes first and NS second, everything else in order of the type value.
pub fn rtype_cmp(a: Rtype, b: Rtype) -> Ordering {
    fn rank(rtype: Rtype) -> (u8, u16) {
        match rtype {
            Rtype::SOA => (0, 0),
            Rtype::NS => (1, 0),
            _ => (2, rtype.to_int()),
        }
    }

    rank(a).cmp(&rank(b))
}

//============ Tests =========================================================
