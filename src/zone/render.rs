//! Rendering a set of records as a zone file.
//!
//! The output prioritizes readability over compactness:
//!
//! - records are grouped by owner name with subdomains next to their
//!   parents,
//! - SOA and NS records come first for each name,
//! - MX records are ordered by preference and A records by address,
//! - repeated owner names are left blank,
//! - TTLs equal to the `$TTL` default are left out,
//! - the apex is written as `@`.

use domain::base::iana::Class;
use tracing::{debug, trace};

use super::compare::compare_keyed;
use super::error::RenderError;
use super::record::{relative_label, PresentRecord};

//------------ Constants -----------------------------------------------------

/// The widths of the owner, TTL, class, and type columns.
const COLUMNS: [usize; 4] = [10, 5, 2, 5];

//------------ render --------------------------------------------------------

/// Renders the records as a zone file with the given origin and default TTL.
///
/// The input is left untouched. On error, nothing has been rendered.
pub fn render<R: PresentRecord>(
    records: &[R],
    origin: &str,
    default_ttl: u32,
) -> Result<String, RenderError> {
    let mut zone = Zone::new(records, origin, default_ttl);
    zone.sort()?;
    zone.present()
}

//------------ Zone ----------------------------------------------------------

/// The records of a zone being rendered.
struct Zone<'a, R> {
    origin: &'a str,
    default_ttl: u32,
    records: Vec<&'a R>,
}

impl<'a, R: PresentRecord> Zone<'a, R> {
    fn new(records: &'a [R], origin: &'a str, default_ttl: u32) -> Self {
        Zone {
            origin,
            default_ttl,
            records: records.iter().collect(),
        }
    }

    /// Brings the records into display order.
    ///
    /// Every record is checked before sorting: its class must be IN and its
    /// sort key must be available. The sort then uses the collected keys.
    fn sort(&mut self) -> Result<(), RenderError> {
        let mut keyed = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            let class = record.class();
            if class != Class::IN {
                return Err(RenderError::UnsupportedClass(class));
            }
            keyed.push((record, record.sort_key()?));
        }

        let origin = self.origin;
        keyed.sort_by(|a, b| compare_keyed(*a, *b, origin));
        self.records = keyed.into_iter().map(|(record, _)| record).collect();
        Ok(())
    }

    /// Produces the text of the sorted zone.
    fn present(&self) -> Result<String, RenderError> {
        debug!(
            "Rendering {} records for zone {}",
            self.records.len(),
            self.origin
        );

        let mut out = format!("$TTL {}\n", self.default_ttl);
        let mut state = LineState::default();
        for record in &self.records {
            if let Some(line) = self.present_record(*record, &mut state)? {
                out.push_str(&line);
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// Produces the line for a single record.
    ///
    /// Returns `None` if the record should not appear in the output.
    fn present_record(&self, record: &R, state: &mut LineState) -> Result<Option<String>, RenderError> {
        let line = record.canonical_line();
        if line.starts_with(';') {
            trace!("Skipping comment {line:?}");
            return Ok(None);
        }

        let fields: Vec<&str> = line.splitn(5, '\t').collect();
        let &[_, ttl, _, _, rdata] = fields.as_slice() else {
            return Err(RenderError::MalformedRecord(line.clone()));
        };

        let label = relative_label(&record.owner_fqdn(), self.origin);
        let repeated = state.previous_label.as_deref() == Some(label.as_str());

        let ttl = match record.ttl_secs() {
            0 => "",
            secs if secs == self.default_ttl => "",
            _ => ttl,
        };

        let rtype = record.rtype().to_string();
        let res = format_line([
            if repeated { "" } else { label.as_str() },
            ttl,
            "IN",
            rtype.as_str(),
            rdata,
        ]);

        state.previous_label = Some(label);
        Ok(Some(res))
    }
}

//------------ LineState -----------------------------------------------------

/// What we remember from the previously written line.
#[derive(Default)]
struct LineState {
    previous_label: Option<String>,
}

//------------ format_line ---------------------------------------------------

/// Lays out the fields of a line in columns.
///
/// Every field starts at the column following the previous one, unless the
/// previous field was too long. Empty fields leave their column blank.
fn format_line(fields: [&str; 5]) -> String {
    let mut res = String::new();
    let mut column = 0;
    for (i, field) in fields.into_iter().enumerate() {
        if res.len() < column {
            res.extend(std::iter::repeat(' ').take(column - res.len()));
        }
        if !field.is_empty() {
            res.push_str(field);
            res.push(' ');
        }
        column += COLUMNS.get(i).copied().unwrap_or(0) + 1;
    }
    res.truncate(res.trim_end().len());
    res
}

//============ Tests =========================================================
