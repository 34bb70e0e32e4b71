use std::collections::HashMap;

use caiac_core::lang::{idents, keywords, kinds};

#[test]
fn expr_kind_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, kinds::ExprKindId> = HashMap::new();

    for &(id, spelling) in kinds::EXPR_KINDS {
        assert_eq!(
            kinds::expr_kind_from_str(spelling),
            Some(id),
            "expression kind spelling not resolvable: {}",
            spelling
        );
        assert_eq!(kinds::expr_kind_as_str(id), spelling, "as_str mismatch for {:?}", id);
        if let Some(prev) = seen.insert(spelling, id) {
            panic!("duplicate expression kind spelling {:?}: {:?} and {:?}", spelling, prev, id);
        }
    }
}

#[test]
fn stmt_kind_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, kinds::StmtKindId> = HashMap::new();

    for &(id, spelling) in kinds::STMT_KINDS {
        assert_eq!(kinds::stmt_kind_from_str(spelling), Some(id));
        assert_eq!(kinds::stmt_kind_as_str(id), spelling);
        if let Some(prev) = seen.insert(spelling, id) {
            panic!("duplicate statement kind spelling {:?}: {:?} and {:?}", spelling, prev, id);
        }
    }
}

#[test]
fn literal_kind_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, kinds::LiteralKindId> = HashMap::new();

    for &(id, spelling) in kinds::LITERAL_KINDS {
        assert_eq!(kinds::literal_kind_from_str(spelling), Some(id));
        assert_eq!(kinds::literal_kind_as_str(id), spelling);
        if let Some(prev) = seen.insert(spelling, id) {
            panic!("duplicate literal kind spelling {:?}: {:?} and {:?}", spelling, prev, id);
        }
    }
}

#[test]
fn keywords_are_never_valid_identifiers() {
    for &kw in keywords::GO_KEYWORDS {
        assert!(!idents::is_valid_ident(kw), "keyword {kw} accepted as identifier");
        // Every keyword is otherwise a well-formed identifier spelling.
        assert_eq!(idents::check_ident(kw), Err(idents::IdentIssue::Keyword));
    }
}
