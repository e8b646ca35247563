use super::*;
use crate::Span;
use pretty_assertions::assert_eq;

#[test]
fn test_binary_op_symbols() {
    assert_eq!(BinaryOp::FloorDiv.as_symbol(), "//");
    assert_eq!(BinaryOp::Pow.as_symbol(), "**");
    assert_eq!(BinaryOp::And.as_symbol(), "at");
    assert_eq!(BinaryOp::Or.as_symbol(), "o");
    assert_eq!(UnaryOp::Not.as_symbol(), "hindi");
    assert_eq!(format!("{} {}", BinaryOp::NotEq, UnaryOp::Neg), "!= -");
}

#[test]
fn test_binary_op_classes() {
    assert!(BinaryOp::LtEq.is_comparison());
    assert!(!BinaryOp::Add.is_comparison());
    assert!(BinaryOp::Or.is_logical());
    assert!(!BinaryOp::Eq.is_logical());
}

#[test]
fn test_else_if_chain_nests() {
    let cond = || Expr::synthetic(ExprKind::Literal(Literal::Bool(true)));
    let inner = IfStmt {
        cond: cond(),
        then_block: Block::default(),
        else_branch: Some(ElseBranch::Block(Block::default())),
    };
    let outer = IfStmt {
        cond: cond(),
        then_block: Block::default(),
        else_branch: Some(ElseBranch::If(Box::new(inner.clone()))),
    };
    let Some(ElseBranch::If(nested)) = &outer.else_branch else {
        panic!("expected else-if branch");
    };
    assert_eq!(**nested, inner);
}

#[test]
fn test_call_target_is_distinct_from_variable() {
    let call = Call {
        target: CallTarget::new("haba", Span::new(0, 4)),
        args: vec![Expr::synthetic(ExprKind::Variable(VariableRef::new(
            "haba",
            Span::new(5, 9),
        )))],
    };
    assert_eq!(call.target.name, "haba");
    assert!(matches!(&call.args[0].kind, ExprKind::Variable(v) if v.name == "haba"));
}
