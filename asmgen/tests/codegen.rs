use asmgen::{translate, translate_to_instrs};

// ── Concrete translations ────────────────────────────────────────────────
// Each test pins down the exact instruction text for one statement shape.

#[test]
fn add_statement_uses_allocated_registers() {
    let asm = translate("total = a + b").expect("should translate");
    assert_eq!(
        asm,
        "MOV AX , [a]\nMOV BX , [b]\nADD AX , BX\nMOV [total] , AX"
    );
}

#[test]
fn sub_statement_uses_allocated_registers() {
    let asm = translate("r = x - y").expect("should translate");
    assert_eq!(asm, "MOV AX , [x]\nMOV BX , [y]\nSUB AX , BX\nMOV [r] , AX");
}

#[test]
fn mul_uses_fixed_accumulator_pair() {
    let asm = translate("r = p * q").expect("should translate");
    assert_eq!(asm, "MOV AX , [p]\nMOV BX , [q]\nMUL BX\nMOV [r] , AX");
    assert_eq!(asm.lines().count(), 4);
}

#[test]
fn div_uses_fixed_accumulator_pair() {
    let asm = translate("q = n / d").expect("should translate");
    assert_eq!(asm, "MOV AX , [n]\nMOV BX , [d]\nDIV BX\nMOV [q] , AX");
}

#[test]
fn destination_reuses_operand_binding() {
    // `x` is already bound when the destination is resolved, so no third
    // register is taken and the store still reads the accumulator.
    let asm = translate("x = x + y").expect("should translate");
    assert_eq!(asm, "MOV AX , [x]\nMOV BX , [y]\nADD AX , BX\nMOV [x] , AX");
}

#[test]
fn whitespace_around_tokens_is_ignored() {
    let asm = translate("  total   =   a   +   b  ").expect("should translate");
    assert_eq!(
        asm,
        "MOV AX , [a]\nMOV BX , [b]\nADD AX , BX\nMOV [total] , AX"
    );
}

// ── Register recycling across statements ─────────────────────────────────

#[test]
fn registers_recycle_across_statements() {
    let asm = translate("a = b + c\nd = e + f").expect("should translate");
    assert_eq!(
        asm,
        "MOV AX , [b]\nMOV BX , [c]\nADD AX , BX\nMOV [a] , AX\n\
         MOV AX , [e]\nMOV BX , [f]\nADD AX , BX\nMOV [d] , AX"
    );
}

#[test]
fn long_sequences_never_exhaust_the_bank() {
    // Every statement frees its registers, so length does not matter.
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!("v{i} = a{i} + b{i}\n"));
    }
    let asm = translate(&source).expect("no exhaustion across statements");
    assert_eq!(asm.lines().count(), 200 * 4);
}

// ── Structural properties ────────────────────────────────────────────────

#[test]
fn one_store_per_statement() {
    let source = "x = a + b\ny = c * d\nz = e / f\nw = g - h";
    let instrs = translate_to_instrs(source).expect("should translate");
    let stores = instrs.iter().filter(|i| i.is_store()).count();
    assert_eq!(stores, 4);
}

#[test]
fn translation_is_deterministic() {
    let source = "x = a + b\ny = c * d\nz = x - w";
    let first = translate(source).expect("should translate");
    let second = translate(source).expect("should translate");
    assert_eq!(first, second);
}

#[test]
fn blank_and_non_assignment_lines_are_skipped() {
    let source = "\n; just a note\n   \nplain words\n";
    let asm = translate(source).expect("skipped lines are not errors");
    assert_eq!(asm, "");
}

#[test]
fn statements_between_blank_lines_still_translate() {
    let asm = translate("\n\nr = p * q\n\n").expect("should translate");
    assert_eq!(asm.lines().count(), 4);
}

// ── Sample input ─────────────────────────────────────────────────────────

#[test]
fn translate_basic_sample() {
    let source = std::fs::read_to_string("../samples/basic.txt")
        .expect("Failed to read samples/basic.txt");
    let asm = translate(&source).expect("basic.txt should translate");
    assert!(!asm.is_empty());
    assert!(asm.lines().all(|l| {
        l.starts_with("MOV")
            || l.starts_with("ADD")
            || l.starts_with("SUB")
            || l.starts_with("MUL")
            || l.starts_with("DIV")
    }));
}
