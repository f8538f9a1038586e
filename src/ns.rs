//! Namespace registry: the fixed prefix-to-URI table used by WordprocessingML
//! and friends, plus helpers for building namespace declarations.

use crate::error::{Error, Result};
use quick_xml::events::BytesStart;
use std::collections::HashMap;

/// DrawingML main namespace
pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// DrawingML chart namespace
pub const C: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
/// DrawingML diagram namespace
pub const DGM: &str = "http://schemas.openxmlformats.org/drawingml/2006/diagram";
/// Pictures namespace
pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
/// Relationships namespace
pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// WordprocessingML main namespace
pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// WordprocessingDrawing namespace
pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
/// Built-in xml namespace
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// The full prefix registry. Fixed at compile time, never mutated.
pub const NSMAP: [(&str, &str); 8] = [
    ("a", A),
    ("c", C),
    ("dgm", DGM),
    ("pic", PIC),
    ("r", R),
    ("w", W),
    ("wp", WP),
    ("xml", XML),
];

/// Resolve a namespace prefix to its URI.
///
/// E.g. `nsuri("w")` returns the WordprocessingML main namespace.
pub fn nsuri(prefix: &str) -> Result<&'static str> {
    match NSMAP.iter().find(|(pfx, _)| *pfx == prefix) {
        Some((_, uri)) => Ok(uri),
        None => {
            log::debug!("namespace prefix '{}' not registered", prefix);
            Err(Error::UnknownPrefix(prefix.to_string()))
        }
    }
}

/// Build `xmlns:pfx="uri"` declaration text for the given prefixes,
/// space-separated, for splicing into literal XML.
///
/// E.g. `nsdecls(&["w"])` returns
/// `xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"`.
pub fn nsdecls(prefixes: &[&str]) -> Result<String> {
    let mut decls = Vec::with_capacity(prefixes.len());
    for pfx in prefixes {
        decls.push(format!("xmlns:{}=\"{}\"", pfx, nsuri(pfx)?));
    }
    Ok(decls.join(" "))
}

/// Build a prefix-to-URI map for the given prefixes, for passing to XML
/// query engines that accept multiple namespace bindings.
pub fn nspfxmap<'a>(prefixes: &[&'a str]) -> Result<HashMap<&'a str, &'static str>> {
    let mut map = HashMap::with_capacity(prefixes.len());
    for pfx in prefixes {
        map.insert(*pfx, nsuri(pfx)?);
    }
    Ok(map)
}

/// Push `xmlns:pfx` attributes for the given prefixes onto an element
/// being written, typically the root element of a part.
pub fn declare_namespaces(element: &mut BytesStart, prefixes: &[&str]) -> Result<()> {
    for pfx in prefixes {
        let uri = nsuri(pfx)?;
        element.push_attribute((format!("xmlns:{}", pfx).as_str(), uri));
    }
    Ok(())
}
