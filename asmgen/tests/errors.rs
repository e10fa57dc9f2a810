use asmgen::backend::regalloc::RegisterFile;
use asmgen::{translate, TranslateError};

// ── Parse failures ───────────────────────────────────────────────────────
// Each test verifies that an invalid line produces the correct error kind
// and cites the offending text.

#[test]
fn unsupported_operation_cites_the_line() {
    let result = translate("x = a % b");
    match result {
        Err(TranslateError::UnsupportedOperation { line }) => assert_eq!(line, "x = a % b"),
        other => panic!("Expected UnsupportedOperation, got: {:?}", other),
    }
}

#[test]
fn assignment_without_operator_is_unsupported() {
    let result = translate("x = y");
    assert!(matches!(
        result,
        Err(TranslateError::UnsupportedOperation { .. })
    ));
}

#[test]
fn plus_presence_wins_over_position() {
    // '+' is checked first, so the line splits on '+' and "b-c" is left as
    // a single token that is not a bare operand.
    let result = translate("x = a+b-c");
    match result {
        Err(TranslateError::MalformedOperands { line }) => assert_eq!(line, "x = a+b-c"),
        other => panic!("Expected MalformedOperands, got: {:?}", other),
    }
}

#[test]
fn three_way_split_is_malformed() {
    let result = translate("x = a + b + c");
    assert!(matches!(
        result,
        Err(TranslateError::MalformedOperands { .. })
    ));
}

#[test]
fn stray_assignment_in_rhs_is_malformed() {
    // Only the first '=' separates destination and expression; a second one
    // ends up inside an operand token.
    let result = translate("x = a + b = c");
    assert!(matches!(
        result,
        Err(TranslateError::MalformedOperands { .. })
    ));
}

#[test]
fn empty_operand_is_malformed() {
    let result = translate("x = a +");
    assert!(matches!(
        result,
        Err(TranslateError::MalformedOperands { .. })
    ));
}

#[test]
fn first_bad_line_aborts_translation() {
    // No partial output survives: the error from line 2 is the whole result.
    let result = translate("x = a + b\ny = c ? d\nz = e + f");
    match result {
        Err(TranslateError::UnsupportedOperation { line }) => assert_eq!(line, "y = c ? d"),
        other => panic!("Expected UnsupportedOperation, got: {:?}", other),
    }
}

// ── Register exhaustion ──────────────────────────────────────────────────
// Two-operand statements free everything they take, so the only way to
// drain the bank is to hold more than four distinct bindings at once.

#[test]
fn fifth_live_binding_exhausts_the_bank() {
    let mut regs = RegisterFile::new();
    for var in ["a", "b", "c", "d"] {
        regs.acquire(var).expect("bank has four registers");
    }
    assert_eq!(regs.free_count(), 0);
    match regs.acquire("e") {
        Err(TranslateError::RegisterExhaustion) => {}
        other => panic!("Expected RegisterExhaustion, got: {:?}", other),
    }
}

#[test]
fn rebinding_a_held_variable_does_not_allocate() {
    let mut regs = RegisterFile::new();
    for var in ["a", "b", "c", "d"] {
        regs.acquire(var).expect("bank has four registers");
    }
    // Re-acquiring an existing binding succeeds even with an empty free set.
    assert!(regs.acquire("a").is_ok());
}

#[test]
fn release_returns_registers_to_the_pool() {
    let mut regs = RegisterFile::new();
    regs.acquire("a").expect("bank has four registers");
    regs.acquire("b").expect("bank has four registers");
    regs.release("a");
    regs.release("a"); // double release is a no-op
    assert_eq!(regs.free_count(), 3);
    assert!(regs.acquire("e").is_ok());
}
