//! Debug pretty-printer for the AST
//!
//! Renders a [`Program`] as an indented tree, one node per line, two spaces
//! per level. Purely a visualization aid for the driver and for tests.

use super::ast::{Expression, Program, Statement};

/// Render `program` as an indented tree.
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("Program\n");

    for statement in &program.statements {
        render_statement(statement, 2, &mut out);
    }

    out
}

fn render_statement(statement: &Statement, indent: usize, out: &mut String) {
    let prefix = " ".repeat(indent);

    match statement {
        Statement::Assignment {
            identifier, expr, ..
        } => {
            out.push_str(&format!("{}Assignment: {}\n", prefix, identifier));
            render_expression(expr, indent + 2, out);
        }
    }
}

fn render_expression(expr: &Expression, indent: usize, out: &mut String) {
    let prefix = " ".repeat(indent);

    match expr {
        Expression::Binary {
            operator,
            left,
            right,
            ..
        } => {
            out.push_str(&format!("{}BinaryExpr '{}'\n", prefix, operator));
            render_expression(left, indent + 2, out);
            render_expression(right, indent + 2, out);
        }
        Expression::Number {
            lexeme, is_real, ..
        } => {
            let label = if *is_real { "RealLiteral" } else { "IntegerLiteral" };
            out.push_str(&format!("{}{}: {}\n", prefix, label, lexeme));
        }
        Expression::Identifier { name, .. } => {
            out.push_str(&format!("{}IdentifierExpr: {}\n", prefix, name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::compile;

    #[test]
    fn test_render_indented_tree() {
        let program = compile("x := 2 + 3 * 4\ny := z").unwrap();

        let expected = "\
Program
  Assignment: x
    BinaryExpr '+'
      IntegerLiteral: 2
      BinaryExpr '*'
        IntegerLiteral: 3
        IntegerLiteral: 4
  Assignment: y
    IdentifierExpr: z
";
        assert_eq!(render(&program), expected);
    }

    #[test]
    fn test_render_real_literal() {
        let program = compile("pi := 3.14").unwrap();

        let expected = "\
Program
  Assignment: pi
    RealLiteral: 3.14
";
        assert_eq!(render(&program), expected);
    }

    #[test]
    fn test_render_empty_program() {
        let program = compile("").unwrap();

        assert_eq!(render(&program), "Program\n");
    }
}
