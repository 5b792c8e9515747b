//! # Language Check
//!
//! Confirms that a language handle is accepted by the linked runtime, and summarizes the
//! grammar behind it.  The node type and query checks compare the metadata shipped with
//! the crate against the compiled tables.

use thiserror::Error;
use serde::Serialize;
use log::{debug,info,error};
use tree_sitter::{Language,Parser,Query};

use crate::node_types::Catalog;
use crate::{GRAMMAR_NAME,HIGHLIGHTS_QUERY,TAGS_QUERY};

#[derive(Error,Debug)]
pub enum Error {
    #[error("ABI version {found} is outside the runtime range {min}..={max}")]
    Abi { found: usize, min: usize, max: usize },
    #[error("unexpected grammar name `{0}`")]
    Name(String),
    #[error("runtime rejected the language: {0}")]
    Incompatible(#[from] tree_sitter::LanguageError),
    #[error("language has no node kinds")]
    Empty,
    #[error("node kind `{0}` is not in the symbol table")]
    MissingKind(String),
    #[error("field `{0}` is not in the field table")]
    MissingField(String),
    #[error("{name} query does not compile: {source}")]
    Query { name: String, source: tree_sitter::QueryError },
    #[error("node types are not valid JSON: {0}")]
    NodeTypes(#[from] serde_json::Error),
    #[error("malformed node type entry: {0}")]
    Malformed(String)
}

/// Identity and table sizes of a verified grammar
#[derive(Serialize,Debug,Clone,PartialEq,Eq)]
pub struct LanguageInfo {
    pub name: String,
    pub abi_version: usize,
    pub version: String,
    pub node_kind_count: usize,
    pub field_count: usize,
    pub parse_state_count: usize
}

impl LanguageInfo {
    pub fn to_json(&self) -> Result<String,Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Verify the runtime can use `lang` and that it is the FreeBASIC grammar.
/// Checks are made in order: ABI range, name, parser acceptance, symbol table.
pub fn verify(lang: &Language) -> Result<LanguageInfo,Error> {
    let found = lang.abi_version();
    let min = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;
    let max = tree_sitter::LANGUAGE_VERSION;
    debug!("language ABI {}, runtime accepts {}..={}",found,min,max);
    if found < min || found > max {
        error!("ABI {} is not supported by this runtime",found);
        return Err(Error::Abi { found, min, max });
    }
    let name = match lang.name() {
        Some(s) => s.to_string(),
        None => String::new()
    };
    if name != GRAMMAR_NAME {
        error!("expected grammar {}, found `{}`",GRAMMAR_NAME,name);
        return Err(Error::Name(name));
    }
    let mut parser = Parser::new();
    parser.set_language(lang)?;
    if lang.node_kind_count() == 0 {
        return Err(Error::Empty);
    }
    let version = match lang.metadata() {
        Some(meta) => format!("{}.{}.{}",meta.major_version,meta.minor_version,meta.patch_version),
        None => "unknown".to_string()
    };
    let ans = LanguageInfo {
        name,
        abi_version: found,
        version,
        node_kind_count: lang.node_kind_count(),
        field_count: lang.field_count(),
        parse_state_count: lang.parse_state_count()
    };
    info!("{} grammar {} verified, {} kinds, {} states",ans.name,ans.version,ans.node_kind_count,ans.parse_state_count);
    Ok(ans)
}

/// Every kind and field listed in `catalog` must resolve in `lang`.
pub fn verify_node_types(lang: &Language,catalog: &Catalog) -> Result<(),Error> {
    for node in catalog.iter() {
        if lang.id_for_node_kind(&node.kind,node.named) == 0 {
            error!("kind `{}` (named={}) not found",node.kind,node.named);
            return Err(Error::MissingKind(node.kind.clone()));
        }
    }
    for field in catalog.field_names() {
        if lang.field_id_for_name(field).is_none() {
            error!("field `{}` not found",field);
            return Err(Error::MissingField(field.to_string()));
        }
    }
    debug!("{} node types resolved",catalog.len());
    Ok(())
}

pub(crate) fn compile(lang: &Language,name: &str,source: &str) -> Result<usize,Error> {
    let query = match Query::new(lang,source) {
        Ok(q) => q,
        Err(e) => {
            error!("{} query: {}",name,e);
            return Err(Error::Query { name: name.to_string(), source: e });
        }
    };
    debug!("{} query has {} patterns",name,query.pattern_count());
    return Ok(query.pattern_count());
}

/// Compile the shipped queries, returns the total pattern count.
pub fn verify_queries(lang: &Language) -> Result<usize,Error> {
    let mut count = 0;
    for (name,source) in [("highlights",HIGHLIGHTS_QUERY),("tags",TAGS_QUERY)] {
        count += compile(lang,name,source)?;
    }
    Ok(count)
}
