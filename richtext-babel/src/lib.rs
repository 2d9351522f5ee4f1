//! HTML interoperability for rich text documents
//!
//!     This crate converts between HTML and an in-memory rich document tree (headings,
//!     paragraphs, quotes, lists, links and formatted text), and exposes the conversion
//!     through a uniform Format interface alongside a JSON and a tree visualization format.
//!
//!     This is a pure lib: it powers richtext-cli but is shell agnostic, so no code here
//!     should print, read env vars or otherwise assume a shell.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConversionError
//!     ├── style                   # Style codec (style attribute <-> NodeStyle, colors)
//!     ├── document                # Node tree, format flags, Editor and transactions
//!     ├── convert                 # HTML DOM <-> node tree
//!     │   ├── registry.rs         # NodeRegistry and the merged tag table
//!     │   ├── import.rs           # Recursive DOM import
//!     │   ├── export.rs           # Node export and serialization
//!     │   ├── dom.rs              # html5ever helpers
//!     │   └── nodes               # One converter pair per node kind
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         ├── html
//!         ├── json
//!         └── treeviz
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # import/export helpers
//!     ├── editor                  # pasting into a live document
//!     └── html
//!         ├── import.rs
//!         ├── export.rs
//!         └── roundtrip.rs        # proptest
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithm
//!
//!     The interesting part is import: HTML tags do not map 1:1 onto nodes. Format tags
//!     produce no node at all but change every text node below them; unknown tags vanish
//!     while keeping their content; text floating next to blocks needs a paragraph that
//!     does not exist in the markup. See ./convert/mod.rs and ./convert/import.rs.
//!
//!     Which tags are understood is not hard-coded in the import loop. Each node kind
//!     declares its tags, and a NodeRegistry, built when an editor is set up, decides which
//!     kinds take part.
//!
//! Library Choices
//!
//!     Parsing and serialization are html5ever's (browser-grade, forgiving), the JSON form
//!     is serde's. We only write the mapping between their trees and ours.

pub mod convert;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod style;

pub use convert::{export_html, import_html, NodeRegistry};
pub use document::{Editor, Node, NodeKind};
pub use error::ConversionError;
pub use format::Format;
pub use registry::FormatRegistry;
