#![no_main]

use core::cmp::Ordering;

use domain::base::iana::{Class, Rtype};
use libfuzzer_sys::fuzz_target;

use prettyzone::zone::{compare, PresentRecord, RenderError, SortKey};

const ORIGIN: &str = "example.com.";
const OWNERS: [&str; 8] = [
    "example.com.",
    "*.example.com.",
    "www.example.com.",
    "a.www.example.com.",
    "mail.example.com.",
    "WWW.Example.COM.",
    "example.org.",
    "a.b.c.example.com.",
];
const RTYPES: [Rtype; 6] = [Rtype::SOA, Rtype::NS, Rtype::A, Rtype::MX, Rtype::TXT, Rtype::AAAA];

#[derive(Debug)]
struct Rr {
    owner: &'static str,
    rtype: Rtype,
    value: [u8; 4],
}

impl Rr {
    fn from_chunk(chunk: &[u8]) -> Self {
        Rr {
            owner: OWNERS[usize::from(chunk[0]) % OWNERS.len()],
            rtype: RTYPES[usize::from(chunk[1]) % RTYPES.len()],
            value: [chunk[2], chunk[3], chunk[4], chunk[5]],
        }
    }
}

impl PresentRecord for Rr {
    fn owner_fqdn(&self) -> String {
        self.owner.into()
    }

    fn ttl_secs(&self) -> u32 {
        300
    }

    fn class(&self) -> Class {
        Class::IN
    }

    fn rtype(&self) -> Rtype {
        self.rtype
    }

    fn sort_key(&self) -> Result<SortKey, RenderError> {
        Ok(match self.rtype {
            Rtype::A => SortKey::Address(self.value),
            // Generic records may come without a key.
            Rtype::MX if self.value[2] & 1 == 1 => SortKey::None,
            Rtype::MX => SortKey::Preference(u16::from_be_bytes([self.value[0], self.value[1]])),
            _ => SortKey::None,
        })
    }

    fn canonical_line(&self) -> String {
        format!("{}\t300\tIN\t{}\t{:?}", self.owner, self.rtype, self.value)
    }
}

fuzz_target!(|data: &[u8]| {
    let records: Vec<_> = data.chunks_exact(6).take(16).map(Rr::from_chunk).collect();

    for a in &records {
        for b in &records {
            let ab = compare(a, b, ORIGIN).unwrap();
            let ba = compare(b, a, ORIGIN).unwrap();
            assert_eq!(ab, ba.reverse(), "{a:?} vs {b:?}");

            for c in &records {
                let bc = compare(b, c, ORIGIN).unwrap();
                if ab != Ordering::Greater && bc != Ordering::Greater {
                    assert_ne!(compare(a, c, ORIGIN).unwrap(), Ordering::Greater);
                }
            }
        }
    }
});
