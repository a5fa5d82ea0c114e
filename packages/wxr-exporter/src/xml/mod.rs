//! XML layer: qualified names, the namespace registry and the streaming writer.

mod name;
mod namespace;
mod output;
mod utils;
mod writer;

pub use name::QualifiedName;
pub use namespace::{NamespaceBinding, NamespaceRegistry};
pub use output::{ExportOutput, OutputTarget, Sink, STDOUT_SENTINEL};
pub use utils::{comment_safe, is_pi_safe, is_xml_char, strip_invalid_chars};
pub use writer::XmlWriter;
