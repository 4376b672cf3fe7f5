use pylet::{parse_source, BufferHost, Error, Interpreter};

fn run_err(src: &str) -> Error {
    let program = match parse_source(src) {
        Ok(program) => program,
        Err(e) => return e,
    };
    let host = BufferHost::new();
    let mut interp = Interpreter::with_host(Box::new(host.clone()));
    interp
        .run(&program)
        .expect_err("expected the program to fail")
}

#[test]
fn diagnostics_use_the_standard_format() {
    let err = run_err("print(1 // 0)\n");
    assert_eq!(
        err.to_string(),
        "Error: ZERO_DIVISION [1:8] - Division by zero"
    );
}

#[test]
fn file_level_errors_use_position_zero() {
    let err = Error::missing_file("No input file provided");
    assert_eq!(
        err.to_string(),
        "Error: MISSING_FILE_ERROR [0:0] - No input file provided"
    );

    let err = Error::file_open("Could not open input file: missing.pyl");
    assert_eq!(
        err.to_string(),
        "Error: FILE_OPEN_ERROR [0:0] - Could not open input file: missing.pyl"
    );
}

#[test]
fn every_failure_carries_its_category() {
    let cases = [
        ("x = 007\n", "LEXICAL_ERROR"),
        ("x = 1 / 2\n", "LEXICAL_ERROR"),
        ("x = (1]\n", "LEXICAL_ERROR"),
        ("if True:\n    x = 1\n  y = 2\n", "INDENTATION_ERROR"),
        ("if True:\nprint(1)\n", "INDENTATION_ERROR"),
        ("x = = 3\n", "SYNTAX_ERROR"),
        ("list = 3\n", "RESERVED_KEYWORD_ERROR"),
        ("print(y)\n", "SEMANTIC_ERROR"),
        ("break\n", "SEMANTIC_ERROR"),
        ("x = 1 + True\n", "TYPE_ERROR"),
        ("L = list()\nL[0] = 1\n", "INDEX_ERROR"),
        ("print(1 // 0)\n", "ZERO_DIVISION"),
    ];
    for (src, category) in cases {
        assert_eq!(run_err(src).category(), category, "source: {src:?}");
    }
}

#[test]
fn positions_point_at_the_offending_operator() {
    // `+` sits at column 6 of line 2.
    let err = run_err("x = True\ny = 1 + x\n");
    match err {
        Error::Type { pos, .. } => {
            assert_eq!(pos.line, 2);
            assert_eq!(pos.col, 6);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn nested_mismatches_blame_the_inner_operator() {
    // The mismatch is at `+` (column 7), not at the enclosing `==`.
    let err = run_err("x = (1 + True) == 5\n");
    match err {
        Error::Type { pos, ref message } => {
            assert_eq!(pos.line, 1);
            assert_eq!(pos.col, 7);
            assert!(message.contains("arithmetic"));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn the_first_error_wins() {
    // Evaluation stops at the failing statement; nothing after it runs.
    let program = parse_source("print(1)\nprint(1 // 0)\nprint(2)\n").expect("parse");
    let host = BufferHost::new();
    let mut interp = Interpreter::with_host(Box::new(host.clone()));
    assert!(interp.run(&program).is_err());
    assert_eq!(host.lines(), vec!["1"]);
}
