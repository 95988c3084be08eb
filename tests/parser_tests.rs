//! End-to-end tests: source text through the scanner and parser.

use pox_lang::lexer::Literal;
use pox_lang::parser::{Associativity, Expr, Stmt};
use pox_lang::{
    parse_source, parse_source_with, Ast, Lexer, ParseError, Parser, ParserOptions, TokenType,
};
use pretty_assertions::assert_eq;

fn parse(source: &str) -> (Ast, Vec<ParseError>) {
    let mut errors: Vec<ParseError> = Vec::new();
    let ast = parse_source(source, None, &mut errors).expect("source should scan");
    (ast, errors)
}

fn single_expression(ast: &Ast) -> &Expr {
    match ast.statements.as_slice() {
        [Stmt::Expression { expression }] => expression,
        other => panic!("expected one expression statement, got {:?}", other),
    }
}

fn number(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal {
            value: Literal::Number(n),
        } => *n,
        other => panic!("expected number literal, got {:?}", other),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let (ast, errors) = parse("1 + 2 * 3;");
    assert!(errors.is_empty());

    match single_expression(&ast) {
        Expr::Binary {
            left,
            operator,
            right,
        } => {
            assert_eq!(operator.token_type, TokenType::Plus);
            assert_eq!(number(left), 1.0);
            match right.as_ref() {
                Expr::Binary {
                    left,
                    operator,
                    right,
                } => {
                    assert_eq!(operator.token_type, TokenType::Star);
                    assert_eq!(number(left), 2.0);
                    assert_eq!(number(right), 3.0);
                }
                other => panic!("expected product, got {:?}", other),
            }
        }
        other => panic!("expected sum, got {:?}", other),
    }
}

#[test]
fn multiplicative_chain_is_right_associative_by_default() {
    let (ast, errors) = parse("2 * 3 * 4;");
    assert!(errors.is_empty());
    assert_eq!(single_expression(&ast).to_string(), "(* 2 (* 3 4))");
}

#[test]
fn multiplicative_chain_can_be_left_associative() {
    let options = ParserOptions {
        factor_associativity: Associativity::Left,
    };
    let mut errors: Vec<ParseError> = Vec::new();
    let ast = parse_source_with("2 * 3 * 4;", None, options, &mut errors).unwrap();
    assert!(errors.is_empty());
    assert_eq!(single_expression(&ast).to_string(), "(* (* 2 3) 4)");
}

#[test]
fn assignment_nests_to_the_right() {
    let (ast, errors) = parse("a = b = 1;");
    assert!(errors.is_empty());

    match single_expression(&ast) {
        Expr::Assign { name, value } => {
            assert_eq!(name.lexeme, "a");
            match value.as_ref() {
                Expr::Assign { name, value } => {
                    assert_eq!(name.lexeme, "b");
                    assert_eq!(number(value), 1.0);
                }
                other => panic!("expected inner assignment, got {:?}", other),
            }
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn invalid_assign_target_is_reported_and_parsing_continues() {
    let (ast, errors) = parse("1 = 2;\nprint 3;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "invalid assign target");
    assert_eq!(errors[0].token.lexeme, "=");
    assert_eq!(ast.to_string(), "(print 3)\n");
}

#[test]
fn unterminated_block_is_reported_at_end() {
    let (ast, errors) = parse("{ print 1;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "expect '}' after");
    assert!(errors[0].is_at_end());
    assert_eq!(errors[0].to_string(), "[line 1] Error at end: expect '}' after");
    assert!(ast.statements.is_empty());
}

#[test]
fn recovery_resumes_at_next_statement() {
    let (ast, errors) = parse("var = ; print 1;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "expect variable name");
    assert_eq!(ast.to_string(), "(print 1)\n");
}

#[test]
fn parsing_is_deterministic() {
    let source = "var a = 1;\n{ var b = a * 2 / -3; print b == (a != nil); }\na = b = \"s\";";
    let (first, first_errors) = parse(source);
    let (second, second_errors) = parse(source);
    assert!(first_errors.is_empty());
    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
}

#[test]
fn garbage_input_terminates() {
    let sources = [
        ")))",
        "}}}}",
        "= = = ;",
        "var var var",
        "{{{{",
        "print print print",
        "( ( ( 1",
        "; ; ;",
        "- ! - !",
    ];

    for source in sources {
        let (_, errors) = parse(source);
        assert!(!errors.is_empty(), "expected errors for {:?}", source);
    }
}

#[test]
fn empty_statements_are_errors_not_nodes() {
    let (ast, errors) = parse("; print 1;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "expect expression");
    assert_eq!(ast.to_string(), "(print 1)\n");
}

#[test]
fn parser_accepts_prebuilt_tokens() {
    let tokens = Lexer::new("print -x;", None).tokenize().unwrap();
    let mut errors: Vec<ParseError> = Vec::new();
    let ast = Parser::new(tokens).parse(&mut errors);
    assert!(errors.is_empty());
    assert_eq!(ast.to_string(), "(print (- x))\n");
}

#[test]
fn whole_program() {
    let source = r#"
        var greeting = "hello";
        var count;
        {
            var inner = (count = 1) + 2 * 3;
            print greeting;
        }
        print !(count >= 10) == true;
    "#;
    let (ast, errors) = parse(source);
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(
        ast.to_string(),
        "(var greeting = \"hello\")\n\
         (var count)\n\
         (block (var inner = (+ (group (= count 1)) (* 2 3))) (print greeting))\n\
         (print (== (! (group (>= count 10))) true))\n"
    );
}

#[test]
fn errors_carry_source_positions() {
    let mut errors: Vec<ParseError> = Vec::new();
    let _ = parse_source("print 1;\nvar 2;", Some("prog.pox"), &mut errors).unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location().to_string(), "prog.pox:2:5");
    assert_eq!(errors[0].to_string(), "[line 2] Error at '2': expect variable name");
}
