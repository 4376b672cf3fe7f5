#[cfg(test)]
mod tests {
    use crate::ast::{BinOp, Expr, Program, Stmt, Target};
    use crate::{parse_source, Error};

    fn parse(src: &str) -> Program {
        parse_source(src).expect("parse")
    }

    #[test]
    fn parse_statements_and_blocks() {
        let src = "x = 1\n\
                   L = list()\n\
                   L.append(x)\n\
                   if x == 1:\n    print(x)\nelif x == 2:\n    print(2)\nelse:\n    print(3)\n\
                   while False:\n    break\n\
                   print(L[0])\n";
        let program = parse(src);
        assert_eq!(program.statements.len(), 6);
        assert!(matches!(program.statements[0], Stmt::Assign { .. }));
        assert!(matches!(program.statements[1], Stmt::ListDecl { .. }));
        assert!(matches!(program.statements[2], Stmt::ListAppend { .. }));
        assert!(matches!(program.statements[3], Stmt::If { .. }));
        assert!(matches!(program.statements[4], Stmt::While { .. }));
        assert!(matches!(program.statements[5], Stmt::Print { .. }));
    }

    #[test]
    fn additive_operators_associate_left() {
        let program = parse("x = 1 - 2 - 3\n");
        let Stmt::Assign { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expr::Binary {
            op: BinOp::Sub,
            left,
            right,
            ..
        } = value
        else {
            panic!("expected subtraction at the root");
        };
        // ((1 - 2) - 3): the nested operation is on the left.
        assert!(matches!(**right, Expr::Number { value: 3, .. }));
        assert!(matches!(**left, Expr::Binary { op: BinOp::Sub, .. }));
    }

    #[test]
    fn boolean_operators_associate_right() {
        let program = parse("x = True or False or True\n");
        let Stmt::Assign { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expr::Binary {
            op: BinOp::Or,
            left,
            right,
            ..
        } = value
        else {
            panic!("expected 'or' at the root");
        };
        assert!(matches!(**left, Expr::Bool { value: true, .. }));
        assert!(matches!(**right, Expr::Binary { op: BinOp::Or, .. }));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let program = parse("x = 2 + 3 * 4\n");
        let Stmt::Assign { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expr::Binary {
            op: BinOp::Add,
            right,
            ..
        } = value
        else {
            panic!("expected addition at the root");
        };
        assert!(matches!(**right, Expr::Binary { op: BinOp::Mul, .. }));
    }

    #[test]
    fn comparisons_do_not_chain() {
        assert!(parse_source("x = 1 < 2 < 3\n").is_err());
        assert!(parse_source("x = 1 == 2 == 3\n").is_err());
    }

    #[test]
    fn unary_forms_are_grammatical() {
        assert!(parse_source("x = not not True\n").is_ok());
        // Grammatical; rejected later by the type discipline.
        assert!(parse_source("x = not - 1\n").is_ok());
        assert!(parse_source("x = - - 1\n").is_ok());
    }

    #[test]
    fn lookahead_disambiguates_list_forms() {
        let program = parse("L = list()\nL.append(1)\nL[0] = 2\nM = L[0]\n");
        assert!(matches!(program.statements[0], Stmt::ListDecl { .. }));
        assert!(matches!(program.statements[1], Stmt::ListAppend { .. }));
        assert!(matches!(
            program.statements[2],
            Stmt::Assign {
                target: Target::Index { .. },
                ..
            }
        ));
        assert!(matches!(
            program.statements[3],
            Stmt::Assign {
                target: Target::Name { .. },
                ..
            }
        ));
    }

    #[test]
    fn blank_lines_between_statements_are_tolerated() {
        let program = parse("x = 1\n\n\ny = 2\n");
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn statements_may_end_at_end_of_input() {
        let program = parse("x = 1");
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn missing_block_indentation_is_reported() {
        let err = parse_source("if True:\nprint(1)\n").unwrap_err();
        assert_eq!(err.category(), "INDENTATION_ERROR");
    }

    #[test]
    fn top_level_indent_is_reported() {
        let err = parse_source("    x = 1\n").unwrap_err();
        assert_eq!(err.category(), "INDENTATION_ERROR");
    }

    #[test]
    fn syntax_error_reports_position() {
        let err = parse_source("x = = 3\n").unwrap_err();
        match err {
            Error::Syntax { pos, .. } => {
                assert_eq!(pos.line, 1);
                assert_eq!(pos.col, 4);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn reserved_word_cannot_open_a_statement() {
        let err = parse_source("list = 3\n").unwrap_err();
        assert_eq!(err.category(), "RESERVED_KEYWORD_ERROR");
    }

    #[test]
    fn missing_terminator_is_reported() {
        let err = parse_source("x = 1 y = 2\n").unwrap_err();
        assert_eq!(err.category(), "SYNTAX_ERROR");
        assert!(err.to_string().contains("Expected newline"));
    }

    #[test]
    fn elif_without_if_is_rejected() {
        let err = parse_source("elif True:\n    print(1)\n").unwrap_err();
        assert_eq!(err.category(), "SYNTAX_ERROR");
    }
}
