//! Arbor HTML
//!
//! HTML concerns over an [`arbor_dom`] tree: serialization to
//! `outerHTML`/`innerHTML` strings with correct escaping, and the
//! best-effort flat fragment parser behind the `innerHTML` setter.
//!
//! The serialized strings are the system's wire format: plain UTF-8 text,
//! recomputed from tree state on every call, never cached.

mod parser;
mod serialize;

pub use parser::{parse_fragment, set_inner_html, set_inner_text};
pub use serialize::{
    escape_attribute, escape_text, inner_html, inner_text, is_self_closing, outer_html,
    SELF_CLOSING_TAGS,
};
