//! # `tree-sitter-freebasic`
//!
//! FreeBASIC grammar for the tree-sitter incremental parser.
//!
//! The crate links the parser tables generated from `grammar.js` and hands them out as an
//! opaque handle.  The handle is a `LanguageFn`, i.e., the address of the generated entry
//! point, which the runtime turns into a `tree_sitter::Language` on demand.
//!
//! ```
//! let mut parser = tree_sitter::Parser::new();
//! let language = tree_sitter_freebasic::LANGUAGE;
//! parser.set_language(&language.into()).expect("Error loading FreeBASIC parser");
//! let tree = parser.parse("PRINT \"hello\"\n", None).expect("parse failed");
//! assert!(!tree.root_node().has_error());
//! ```
//!
//! ## Metadata
//!
//! The grammar's metadata files are embedded as strings:
//! * `NODE_TYPES` is `src/node-types.json`, also available as a typed `node_types::Catalog`
//! * `GRAMMAR_JSON` is `src/grammar.json`
//! * `HIGHLIGHTS_QUERY` and `TAGS_QUERY` are the files in `queries`
//!
//! `check` can be used to confirm the linked runtime accepts the tables.

pub mod check;
pub mod node_types;

#[cfg(test)]
mod handle_test;

use tree_sitter_language::LanguageFn;

extern "C" {
    fn tree_sitter_freebasic() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for FreeBASIC.
/// The value is the same for every caller and may be shared freely between threads.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_freebasic) };

/// Name embedded in the parser tables
pub const GRAMMAR_NAME: &str = "freebasic";

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers/6-static-node-types
pub const NODE_TYPES: &str = include_str!("node-types.json");

/// The grammar in tree-sitter's JSON form
pub const GRAMMAR_JSON: &str = include_str!("grammar.json");

pub const HIGHLIGHTS_QUERY: &str = include_str!("../queries/highlights.scm");

pub const TAGS_QUERY: &str = include_str!("../queries/tags.scm");

/// Runtime language object built from [`LANGUAGE`]
pub fn language() -> tree_sitter::Language {
    LANGUAGE.into()
}

/// Address of the static parser tables.
/// This is what the runtime dereferences, it is never null once the crate links.
pub fn raw_handle() -> *const () {
    return unsafe { (LANGUAGE.into_raw())() };
}
