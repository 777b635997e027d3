//! Integration tests for the canonical printer
//!
//! Printing a parsed program and parsing it again must give the same tree.

use level::language::pretty::{PrettyConfig, print_expr_with_config, print_program};
use level::language::{Program, parse, parse_expression};
use proptest::prelude::*;

fn parse_ok(source: &str) -> Program {
    let result = parse(source);
    assert!(result.is_ok(), "diagnostics: {:?}", result.diagnostics);
    result.program
}

fn shape(source: &str) -> String {
    let config = PrettyConfig {
        explicit_parens: true,
        ..PrettyConfig::default()
    };
    print_expr_with_config(&parse_expression(source).unwrap(), &config)
}

#[test]
fn precedence_shapes() {
    assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(shape("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(shape("a = b = 3"), "(a = (b = 3))");
    assert_eq!(shape("a or b and c == d < e + f * -g"), "(a or (b and (c == (d < (e + (f * (-g)))))))");
}

#[test]
fn script_round_trip() {
    let source = r#"
        number alert_range = 8;
        func distance(a: number, b: number): number { return a - b; }
        entity Guard {
            number hp = 100;
            during (hp > 0 && alert_range >= 1) {
                if (distance(hp, 3) < alert_range) { say: Halt!; attack(foe); }
                else if (hp < 10) move(home);
                else { patrol[i] = (patrol[i] + 1) * 2; }
            }
            until (hp == 100) ;
        }
    "#;
    let first = print_program(&parse_ok(source));
    let second = print_program(&parse_ok(&first));
    assert_eq!(first, second);
    assert!(first.contains("func distance(number a, number b): number {"));
    assert!(first.contains("during (hp > 0 and alert_range >= 1) {"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Arithmetic over random operators keeps its shape through printing.
    #[test]
    fn arithmetic_round_trip(
        nums in prop::collection::vec(0..1000u32, 2..8),
        ops in prop::collection::vec(prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")], 7),
    ) {
        let mut source = nums[0].to_string();
        for (n, op) in nums[1..].iter().zip(&ops) {
            source.push_str(&format!(" {op} {n}"));
        }
        let config = PrettyConfig { explicit_parens: true, ..PrettyConfig::default() };
        let expr = parse_expression(&source).unwrap();
        let printed = level::language::pretty::print_expr(&expr);
        let reparsed = parse_expression(&printed).unwrap();
        prop_assert_eq!(
            print_expr_with_config(&expr, &config),
            print_expr_with_config(&reparsed, &config)
        );
    }
}
