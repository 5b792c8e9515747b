//! Helpers shared by the integration tests
#![allow(dead_code)]

pub enum WalkerChoice {
    GotoChild,
    GotoSibling,
    Exit
}

pub trait Visit {
    fn visit(&mut self,curs: &tree_sitter::TreeCursor) -> WalkerChoice;
    fn walk(&mut self,tree: &tree_sitter::Tree)
    {
        let mut curs = tree.walk();
        let mut choice = self.visit(&curs);
        while !matches!(choice,WalkerChoice::Exit)
        {
            if matches!(choice,WalkerChoice::GotoChild) && curs.goto_first_child() {
                choice = self.visit(&curs);
            } else if curs.goto_next_sibling() {
                choice = self.visit(&curs);
            } else if curs.goto_parent() {
                choice = WalkerChoice::GotoSibling;
            } else {
                choice = WalkerChoice::Exit;
            }
        }
    }
}

/// Collects the rows of `ERROR` and `MISSING` nodes
pub struct SyntaxCheckVisitor {
    pub error_rows: Vec<usize>,
    pub missing: Vec<String>
}

impl SyntaxCheckVisitor {
    pub fn new() -> Self {
        Self { error_rows: Vec::new(), missing: Vec::new() }
    }
}

impl Visit for SyntaxCheckVisitor {
    fn visit(&mut self,curs: &tree_sitter::TreeCursor) -> WalkerChoice {
        let node = curs.node();
        if node.is_error() {
            self.error_rows.push(node.start_position().row);
            return WalkerChoice::GotoSibling;
        }
        if node.is_missing() {
            self.missing.push(node.kind().to_string());
        }
        if node.has_error() {
            return WalkerChoice::GotoChild;
        }
        return WalkerChoice::GotoSibling;
    }
}

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse(code: &str) -> Result<tree_sitter::Tree,Box<dyn std::error::Error>> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&tree_sitter_freebasic::LANGUAGE.into())?;
    match parser.parse(code,None) {
        Some(tree) => Ok(tree),
        None => Err(Box::new(std::io::Error::new(std::io::ErrorKind::Other,"parser returned no tree")))
    }
}

/// Collapse whitespace so S-expressions compare independent of layout
pub fn normalize_sexp(sexp: &str) -> String {
    sexp.split_whitespace().collect::<Vec<&str>>().join(" ").replace(" )",")")
}
