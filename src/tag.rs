//! Namespace-prefixed tag value type

use crate::error::{Error, Result};
use crate::ns;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A tag string of the form `prefix:local`, parsed once at construction.
///
/// Behaves as the raw tag string wherever one is expected (equality,
/// hashing, ordering, and display all use the original text) while also
/// exposing the namespace parts and the Clark-notation form.
///
/// Example: `w:body` has prefix `w`, local part `body`, and Clark name
/// `{http://schemas.openxmlformats.org/wordprocessingml/2006/main}body`.
#[derive(Clone, Debug)]
pub struct NsPrefixedTag {
    /// The original `prefix:local` text
    raw: String,
    /// Byte offset of the ':' separator in `raw`
    sep: usize,
    /// URI resolved from the prefix at construction
    ns_uri: &'static str,
}

impl NsPrefixedTag {
    /// Parse a `prefix:local` tag string.
    ///
    /// Fails with [`Error::MalformedTag`] unless the string contains
    /// exactly one ':', and with [`Error::UnknownPrefix`] if the prefix
    /// is not in the registry. No further validation is done; `w:` is a
    /// valid tag with an empty local part.
    pub fn new(nstag: &str) -> Result<Self> {
        let sep = match (nstag.find(':'), nstag.rfind(':')) {
            (Some(first), Some(last)) if first == last => first,
            _ => {
                log::debug!("tag '{}' does not split into prefix:local", nstag);
                return Err(Error::MalformedTag(nstag.to_string()));
            }
        };
        let ns_uri = ns::nsuri(&nstag[..sep])?;
        Ok(Self {
            raw: nstag.to_string(),
            sep,
            ns_uri,
        })
    }

    /// The original tag text, e.g. `w:body`
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The part after the separator, e.g. `body` for `w:body`
    pub fn local_part(&self) -> &str {
        &self.raw[self.sep + 1..]
    }

    /// The namespace prefix, e.g. `w` for `w:body`
    pub fn nspfx(&self) -> &str {
        &self.raw[..self.sep]
    }

    /// The namespace URI the prefix resolved to
    pub fn nsuri(&self) -> &'static str {
        self.ns_uri
    }

    /// A single-entry prefix-to-URI map, built fresh per call.
    ///
    /// Handy for passing to XPath-style query calls that take a map of
    /// namespace bindings.
    pub fn nsmap(&self) -> HashMap<&str, &'static str> {
        HashMap::from([(self.nspfx(), self.ns_uri)])
    }

    /// The Clark-notation form `{uri}local` used by XML query engines
    pub fn clark_name(&self) -> String {
        format!("{{{}}}{}", self.ns_uri, self.local_part())
    }
}

/// One-shot conversion of a `prefix:local` tag to Clark notation.
///
/// `qn("w:body")` yields
/// `{http://schemas.openxmlformats.org/wordprocessingml/2006/main}body`.
pub fn qn(nstag: &str) -> Result<String> {
    Ok(NsPrefixedTag::new(nstag)?.clark_name())
}

// Identity delegates to the raw text so a tag interoperates with plain
// strings in maps, sets, and comparisons.

impl PartialEq for NsPrefixedTag {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for NsPrefixedTag {}

impl Hash for NsPrefixedTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for NsPrefixedTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NsPrefixedTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl PartialEq<str> for NsPrefixedTag {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for NsPrefixedTag {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl PartialEq<String> for NsPrefixedTag {
    fn eq(&self, other: &String) -> bool {
        &self.raw == other
    }
}

impl PartialEq<NsPrefixedTag> for str {
    fn eq(&self, other: &NsPrefixedTag) -> bool {
        self == other.raw
    }
}

impl PartialEq<NsPrefixedTag> for &str {
    fn eq(&self, other: &NsPrefixedTag) -> bool {
        *self == other.raw
    }
}

impl PartialEq<NsPrefixedTag> for String {
    fn eq(&self, other: &NsPrefixedTag) -> bool {
        *self == other.raw
    }
}

impl Deref for NsPrefixedTag {
    type Target = str;

    fn deref(&self) -> &str {
        &self.raw
    }
}

impl AsRef<str> for NsPrefixedTag {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Borrow<str> for NsPrefixedTag {
    fn borrow(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for NsPrefixedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for NsPrefixedTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NsPrefixedTag::new(s)
    }
}

impl From<NsPrefixedTag> for String {
    fn from(tag: NsPrefixedTag) -> String {
        tag.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_splits_on_separator() {
        let tag = NsPrefixedTag::new("w:body").unwrap();
        assert_eq!(tag.nspfx(), "w");
        assert_eq!(tag.local_part(), "body");
        assert_eq!(tag.nsuri(), ns::W);
    }

    #[test]
    fn test_new_no_separator() {
        assert_eq!(
            NsPrefixedTag::new("body"),
            Err(Error::MalformedTag("body".to_string()))
        );
    }

    #[test]
    fn test_new_multiple_separators() {
        assert_eq!(
            NsPrefixedTag::new("w:body:extra"),
            Err(Error::MalformedTag("w:body:extra".to_string()))
        );
    }

    #[test]
    fn test_new_unknown_prefix() {
        assert_eq!(
            NsPrefixedTag::new("zz:body"),
            Err(Error::UnknownPrefix("zz".to_string()))
        );
    }

    #[test]
    fn test_empty_local_part_allowed() {
        let tag = NsPrefixedTag::new("w:").unwrap();
        assert_eq!(tag.local_part(), "");
        assert_eq!(tag.nspfx(), "w");
    }

    #[test]
    fn test_empty_prefix_not_registered() {
        assert_eq!(
            NsPrefixedTag::new(":body"),
            Err(Error::UnknownPrefix("".to_string()))
        );
    }

    #[test]
    fn test_clark_name() {
        let tag = NsPrefixedTag::new("w:body").unwrap();
        assert_eq!(
            tag.clark_name(),
            "{http://schemas.openxmlformats.org/wordprocessingml/2006/main}body"
        );
    }

    #[test]
    fn test_nsmap_single_entry() {
        let tag = NsPrefixedTag::new("xml:space").unwrap();
        let map = tag.nsmap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["xml"], "http://www.w3.org/XML/1998/namespace");
    }

    #[test]
    fn test_string_identity() {
        let tag = NsPrefixedTag::new("w:body").unwrap();
        assert_eq!(tag, "w:body");
        assert_eq!("w:body", tag);
        assert_eq!(tag, "w:body".to_string());
        assert_eq!(tag.to_string(), "w:body");
        assert_eq!(&*tag, "w:body");
    }

    #[test]
    fn test_hash_matches_raw_string() {
        use std::collections::HashSet;

        let mut set: HashSet<NsPrefixedTag> = HashSet::new();
        set.insert(NsPrefixedTag::new("w:p").unwrap());

        // Borrow<str> + matching Hash lets plain &str probe the set
        assert!(set.contains("w:p"));
        assert!(!set.contains("w:r"));
    }

    #[test]
    fn test_ordering_by_raw_text() {
        let a = NsPrefixedTag::new("a:blip").unwrap();
        let w = NsPrefixedTag::new("w:body").unwrap();
        assert!(a < w);
    }

    #[test]
    fn test_qn() {
        assert_eq!(
            qn("r:id").unwrap(),
            "{http://schemas.openxmlformats.org/officeDocument/2006/relationships}id"
        );
        assert!(qn("nope").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        let tag: NsPrefixedTag = "pic:pic".parse().unwrap();
        assert_eq!(String::from(tag), "pic:pic");
    }
}
