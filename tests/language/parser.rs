//! Integration tests for the parser
//!
//! Tests parsing of Level scripts to the syntax tree.

use level::language::ast::{BinaryOp, Declaration, Expr, Stmt};
use level::language::{Program, parse, parse_expression};

fn parse_ok(source: &str) -> Program {
    let result = parse(source);
    assert!(result.is_ok(), "diagnostics: {:?}", result.diagnostics);
    result.program
}

fn body(program: &Program) -> &[Stmt] {
    match &program.declarations[0] {
        Declaration::Entity(e) => &e.body.statements,
        Declaration::Function(f) => &f.body.statements,
        Declaration::Variable(_) => panic!("expected a declaration with a body"),
    }
}

fn number(expr: &Expr) -> f64 {
    expr.as_number().expect("number literal")
}

// =============================================================================
// Precedence and Associativity
// =============================================================================

#[test]
fn multiplication_binds_tighter() {
    let Expr::Binary(add) = parse_expression("1 + 2 * 3").unwrap() else {
        panic!("expected binary");
    };
    assert_eq!(add.op, BinaryOp::Add);
    assert_eq!(number(&add.left), 1.0);
    let Expr::Binary(mul) = *add.right else {
        panic!("expected binary");
    };
    assert_eq!(mul.op, BinaryOp::Mul);
    assert_eq!(number(&mul.left), 2.0);
    assert_eq!(number(&mul.right), 3.0);
}

#[test]
fn assignment_right_associative() {
    let Expr::Assign(outer) = parse_expression("a = b = 3").unwrap() else {
        panic!("expected assignment");
    };
    assert_eq!(outer.target.as_identifier(), Some("a"));
    let Expr::Assign(inner) = *outer.value else {
        panic!("expected assignment");
    };
    assert_eq!(inner.target.as_identifier(), Some("b"));
    assert_eq!(number(&inner.value), 3.0);
}

#[test]
fn subtraction_left_associative() {
    let Expr::Binary(outer) = parse_expression("1 - 2 - 3").unwrap() else {
        panic!("expected binary");
    };
    assert_eq!(outer.op, BinaryOp::Sub);
    assert_eq!(number(&outer.right), 3.0);
    let Expr::Binary(inner) = *outer.left else {
        panic!("expected binary");
    };
    assert_eq!(inner.op, BinaryOp::Sub);
    assert_eq!((number(&inner.left), number(&inner.right)), (1.0, 2.0));
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn dangling_else() {
    let program = parse_ok("entity E { if (a) if (b) move(); else wait(); }");
    let Stmt::If(outer) = &body(&program)[0] else {
        panic!("expected if");
    };
    assert!(outer.else_branch.is_none());
    let Stmt::If(inner) = outer.then_branch.as_ref() else {
        panic!("expected inner if");
    };
    let Some(else_branch) = &inner.else_branch else {
        panic!("else should bind to the inner if");
    };
    assert!(matches!(else_branch.as_ref(), Stmt::Action(_)));
}

#[test]
fn during_and_until_stay_distinct() {
    let program = parse_ok(
        "entity E { during (x < 5) { x = x + 1; } until (x >= 5) { x = x + 1; } }",
    );
    let statements = body(&program);
    assert_eq!(statements[0].kind_name(), "during");
    assert_eq!(statements[1].kind_name(), "until");
    assert_ne!(
        std::mem::discriminant(&statements[0]),
        std::mem::discriminant(&statements[1])
    );
}

#[test]
fn top_level_declarations_in_order() {
    let program = parse_ok("entity Guard { }\nfunc helper() { return; }");
    assert_eq!(program.declarations.len(), 2);
    assert!(matches!(&program.declarations[0], Declaration::Entity(e) if e.name.name == "Guard"));
    assert!(matches!(&program.declarations[1], Declaration::Function(f) if f.name.name == "helper"));
}

#[test]
fn complete_script() {
    let source = r#"
        number alert_range = 8;

        func distance(number a, b: number): number {
            return a - b;
        }

        entity Guard {
            number hp = 100;
            array patrol = [1, 2, 3];
            during (hp > 0) {
                if (distance(hp, alert_range) < 3 && len(patrol) != 0) {
                    say: Halt, who goes there?;
                    attack(foe);
                } else {
                    move(patrol[0]);
                }
                patrol[0] = patrol[0] + 1;
                hp = hp - 1;
            }
            gather;
            use("potion");
        }
    "#;
    let program = parse_ok(source);
    let names: Vec<&str> = program.declarations.iter().map(Declaration::name).collect();
    assert_eq!(names, ["alert_range", "distance", "Guard"]);
    let Declaration::Entity(guard) = &program.declarations[2] else {
        panic!("expected entity");
    };
    assert_eq!(guard.body.statements.len(), 5);
    assert_eq!(guard.span.line, 8);
}

#[test]
fn colon_declarations_anywhere() {
    let source = "
        steps: number = 0;

        entity Walker {
            goal: number = 5;
            until (steps == goal) {
                path: array = [steps];
                move(path[0]);
                steps = steps + 1;
            }
        }
    ";
    let program = parse_ok(source);
    let names: Vec<&str> = program.declarations.iter().map(Declaration::name).collect();
    assert_eq!(names, ["steps", "Walker"]);
    let Declaration::Entity(walker) = &program.declarations[1] else {
        panic!("expected entity");
    };
    assert!(matches!(walker.body.statements[0], Stmt::Variable(_)));
    assert!(matches!(walker.body.statements[1], Stmt::Until(_)));
}

#[test]
fn spans_point_into_source() {
    let source = "entity E {\n    attack(foe);\n}";
    let program = parse_ok(source);
    let attack = &body(&program)[0];
    assert_eq!(attack.span().text(source), "attack(foe);");
    assert_eq!((attack.span().line, attack.span().column), (2, 5));
}

#[test]
fn parses_are_independent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("entity E{i} {{ wait({i}); }}");
                parse(&source).program.declarations[0].name().to_string()
            })
        })
        .collect();
    let names: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names, ["E0", "E1", "E2", "E3"]);
}
