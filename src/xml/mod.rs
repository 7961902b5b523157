//! Tagged-text primitives shared by every encoder.

pub mod escape;
pub mod writer;

pub use escape::{escape_json_text, escape_xml};
pub use writer::XmlWriter;
