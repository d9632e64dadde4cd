//! Presenting DNS records as a tidy zone file.
//!
//! The records of a zone are brought into a fixed display order by
//! [`compare`] and then written out by [`render`] in aligned columns with
//! repeated owner names and default TTLs left out.
//!
//! The output is meant to be read and diffed by humans. Rendering the same
//! set of records always results in the same text, regardless of the order
//! the records were given in.

mod compare;
mod error;
mod load;
mod record;
mod render;

pub use self::compare::{compare, label_cmp, rtype_cmp};
pub use self::error::RenderError;
pub use self::load::{find_soa, load_records};
pub use self::record::{relative_label, PresentRecord, SortKey, ZoneRecord};
pub use self::render::render;
