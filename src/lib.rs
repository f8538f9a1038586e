//! # ooxml-ns
//!
//! Namespace prefix resolution for the OOXML dialects.
//!
//! Maps the short prefixes used throughout WordprocessingML (`w`, `r`,
//! `a`, ...) to their namespace URIs, and converts `prefix:local` tag
//! strings into the Clark-notation form (`{uri}local`) expected by XML
//! query and matching engines.
//!
//! ## Quick Start
//!
//! ```rust
//! use ooxml_ns::{qn, NsPrefixedTag};
//!
//! let tag = NsPrefixedTag::new("w:body")?;
//! assert_eq!(tag.local_part(), "body");
//! assert_eq!(tag.nspfx(), "w");
//! assert_eq!(
//!     tag.clark_name(),
//!     "{http://schemas.openxmlformats.org/wordprocessingml/2006/main}body"
//! );
//!
//! // Shorthand when only the Clark name is needed
//! assert_eq!(qn("w:body")?, tag.clark_name());
//! # Ok::<(), ooxml_ns::Error>(())
//! ```

pub mod error;
pub mod ns;
pub mod tag;

pub use error::{Error, Result};
pub use ns::*;
pub use tag::{qn, NsPrefixedTag};
