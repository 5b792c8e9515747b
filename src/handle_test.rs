//! test of the language handle

use super::{LANGUAGE,language,raw_handle};

fn parse_ok(lang: &tree_sitter::Language,code: &str) -> bool {
    let mut parser = tree_sitter::Parser::new();
    if parser.set_language(lang).is_err() {
        return false;
    }
    match parser.parse(code,None) {
        Some(tree) => !tree.root_node().has_error(),
        None => false
    }
}

#[test]
fn non_null() {
    assert!(!raw_handle().is_null());
}

#[test]
fn stable() {
    let first = raw_handle();
    let second = raw_handle();
    assert_eq!(first,second);
    assert_eq!(LANGUAGE.into_raw() as usize,LANGUAGE.into_raw() as usize);
}

#[test]
fn consumable() {
    let lang = language();
    assert!(lang.node_kind_count() > 0);
    assert!(parse_ok(&lang,"DIM x AS INTEGER = 1\nPRINT x\n"));
}

#[test]
fn equal_languages() {
    let a = language();
    let b: tree_sitter::Language = LANGUAGE.into();
    assert_eq!(a,b);
    assert_eq!(a.clone(),b);
}

#[test]
fn concurrent_callers() {
    let expected = raw_handle() as usize;
    let results: Vec<(usize,bool)> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|i| s.spawn(move || {
            let addr = raw_handle() as usize;
            let code = format!("FOR i = 1 TO {}\n  PRINT i\nNEXT\n",i+1);
            (addr,parse_ok(&language(),&code))
        })).collect();
        handles.into_iter().map(|h| h.join().expect("thread panicked")).collect()
    });
    assert_eq!(results.len(),8);
    for (addr,parsed) in results {
        assert_ne!(addr,0);
        assert_eq!(addr,expected);
        assert!(parsed);
    }
}
