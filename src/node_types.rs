//! # Node Types
//!
//! Typed view of `node-types.json`, the list of syntax node kinds the grammar produces.
//! Each entry gives the kind and whether it is named, plus, for non-terminals, the fields
//! and unnamed children it may carry.  Flags mark the root kind and the extras.

use std::collections::BTreeMap;
use serde_json::Value;
use log::{debug,trace};

use crate::check::Error;
use crate::NODE_TYPES;

/// Reference to a node kind, as it appears in field and child type lists
#[derive(Debug,Clone,PartialEq,Eq,PartialOrd,Ord)]
pub struct NodeRef {
    pub kind: String,
    pub named: bool
}

#[derive(Debug,Clone,PartialEq)]
pub struct FieldInfo {
    pub multiple: bool,
    pub required: bool,
    pub types: Vec<NodeRef>
}

impl FieldInfo {
    /// true if a node of this kind can fill the slot
    pub fn accepts(&self,kind: &str,named: bool) -> bool {
        self.types.iter().any(|t| t.kind==kind && t.named==named)
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct NodeType {
    pub kind: String,
    pub named: bool,
    pub root: bool,
    pub extra: bool,
    pub fields: BTreeMap<String,FieldInfo>,
    pub children: Option<FieldInfo>,
    pub subtypes: Vec<NodeRef>
}

pub struct Catalog {
    entries: Vec<NodeType>
}

fn get_bool(obj: &serde_json::Map<String,Value>,key: &str) -> bool {
    match obj.get(key) {
        Some(v) => v.as_bool().unwrap_or(false),
        None => false
    }
}

fn node_ref(val: &Value) -> Result<NodeRef,Error> {
    let obj = match val.as_object() {
        Some(o) => o,
        None => return Err(Error::Malformed(format!("expected an object, found {}",val)))
    };
    let kind = match obj.get("type").and_then(|v| v.as_str()) {
        Some(s) => s.to_string(),
        None => return Err(Error::Malformed(format!("missing `type` in {}",val)))
    };
    let named = match obj.get("named").and_then(|v| v.as_bool()) {
        Some(b) => b,
        None => return Err(Error::Malformed(format!("missing `named` for `{}`",kind)))
    };
    Ok(NodeRef { kind, named })
}

fn node_refs(val: Option<&Value>) -> Result<Vec<NodeRef>,Error> {
    let mut ans = Vec::new();
    if let Some(list) = val.and_then(|v| v.as_array()) {
        for item in list {
            ans.push(node_ref(item)?);
        }
    }
    Ok(ans)
}

fn field_info(val: &Value) -> Result<FieldInfo,Error> {
    let obj = match val.as_object() {
        Some(o) => o,
        None => return Err(Error::Malformed(format!("expected a field object, found {}",val)))
    };
    Ok(FieldInfo {
        multiple: get_bool(obj,"multiple"),
        required: get_bool(obj,"required"),
        types: node_refs(obj.get("types"))?
    })
}

fn node_type(val: &Value) -> Result<NodeType,Error> {
    let head = node_ref(val)?;
    let mut ans = NodeType {
        kind: head.kind,
        named: head.named,
        root: false,
        extra: false,
        fields: BTreeMap::new(),
        children: None,
        subtypes: Vec::new()
    };
    if let Some(obj) = val.as_object() {
        ans.root = get_bool(obj,"root");
        ans.extra = get_bool(obj,"extra");
        if let Some(fields) = obj.get("fields").and_then(|v| v.as_object()) {
            for (name,info) in fields {
                ans.fields.insert(name.to_string(),field_info(info)?);
            }
        }
        if let Some(children) = obj.get("children") {
            ans.children = Some(field_info(children)?);
        }
        ans.subtypes = node_refs(obj.get("subtypes"))?;
    }
    trace!("node type {} with {} fields",ans.kind,ans.fields.len());
    Ok(ans)
}

impl Catalog {
    /// Parse the node types shipped with this crate
    pub fn load() -> Result<Self,Error> {
        Self::from_json(NODE_TYPES)
    }
    /// Parse any text in `node-types.json` format
    pub fn from_json(json: &str) -> Result<Self,Error> {
        let root = serde_json::from_str::<Value>(json)?;
        let list = match root.as_array() {
            Some(l) => l,
            None => return Err(Error::Malformed("top level is not an array".to_string()))
        };
        let mut entries = Vec::new();
        for item in list {
            entries.push(node_type(item)?);
        }
        debug!("loaded {} node types",entries.len());
        Ok(Self { entries })
    }
    pub fn iter(&self) -> std::slice::Iter<'_,NodeType> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn get(&self,kind: &str,named: bool) -> Option<&NodeType> {
        self.entries.iter().find(|n| n.kind==kind && n.named==named)
    }
    /// The kind at the top of every tree
    pub fn root(&self) -> Option<&NodeType> {
        self.entries.iter().find(|n| n.root)
    }
    /// Kinds that may appear anywhere, e.g. comments
    pub fn extras(&self) -> Vec<&str> {
        self.entries.iter().filter(|n| n.extra).map(|n| n.kind.as_str()).collect()
    }
    /// Sorted list of named kinds
    pub fn named_kinds(&self) -> Vec<&str> {
        let mut ans: Vec<&str> = self.entries.iter().filter(|n| n.named).map(|n| n.kind.as_str()).collect();
        ans.sort();
        ans.dedup();
        return ans;
    }
    /// Sorted list of every field name used by any kind
    pub fn field_names(&self) -> Vec<&str> {
        let mut ans: Vec<&str> = self.entries.iter().flat_map(|n| n.fields.keys().map(|k| k.as_str())).collect();
        ans.sort();
        ans.dedup();
        return ans;
    }
}
