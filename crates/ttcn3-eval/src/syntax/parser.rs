//! Recursive-descent parser for statements with a precedence-climbing
//! expression parser.
//!
//! Binding powers, loosest first: `or`, `xor`, `and`, prefix `not`,
//! `== !=`, `< <= > >=`, `<< >>`, `+ - &`, `* / mod rem`, prefix `+ -`.
//! Every infix operator is left-associative.

use tracing::trace;

use super::ast::*;
use super::lexer::{tokenize, SpannedToken, Token};
use crate::frontend::ParseError;
use crate::stack::ensure_sufficient_stack;

/// Right binding power of prefix `not`: looser than comparisons.
const NOT_BP: u8 = 7;

/// Right binding power of prefix `+` and `-`.
const SIGN_BP: u8 = 19;

/// Parse `source` into a program.
///
/// # Errors
///
/// Returns the first lexical or syntactic error, carrying the byte offset
/// where it was detected.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    trace!(count = tokens.len(), "tokenized");
    Parser::new(tokens, source.len()).parse_program()
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    end: usize,
}

impl Parser {
    fn new(tokens: Vec<SpannedToken>, end: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Cursor
    // ═══════════════════════════════════════════════════════════════════

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map(|t| t.span.start)
            .unwrap_or(self.end)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|t| t.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{}`", expected)))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String, ParseError> {
        match self.peek() {
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let found = match self.peek() {
            Some(token) => format!("`{}`", token),
            None => "end of input".to_string(),
        };
        ParseError::new(format!("expected {}, found {}", expected, found))
            .with_offset(self.offset())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Statements
    // ═══════════════════════════════════════════════════════════════════

    fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();
        while self.peek().is_some() {
            if self.eat(&Token::Semi) {
                continue;
            }
            stmts.push(self.parse_stmt()?);
        }
        Ok(Program { stmts })
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| self.parse_block_inner())
    }

    fn parse_block_inner(&mut self) -> Result<Block, ParseError> {
        self.expect(&Token::LBrace)?;
        let mut stmts = Vec::new();
        loop {
            match self.peek() {
                Some(Token::RBrace) => {
                    self.pos += 1;
                    return Ok(Block { stmts });
                }
                Some(Token::Semi) => self.pos += 1,
                Some(_) => stmts.push(self.parse_stmt()?),
                None => return Err(self.unexpected("`}`")),
            }
        }
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let stmt = match self.peek() {
            Some(Token::If) => Stmt::If(self.parse_if()?),
            Some(Token::Return) => Stmt::Return(self.parse_return()?),
            Some(Token::LBrace) => Stmt::Block(self.parse_block()?),
            Some(Token::Var) | Some(Token::Const) => Stmt::VarDecl(self.parse_var_decl()?),
            _ => Stmt::Expr(self.parse_expr(0)?),
        };
        self.eat(&Token::Semi);
        Ok(stmt)
    }

    fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        self.expect(&Token::If)?;
        self.expect(&Token::LParen)?;
        let cond = self.parse_expr(0)?;
        self.expect(&Token::RParen)?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.eat(&Token::Else) {
            if self.peek() == Some(&Token::If) {
                Some(ElseBranch::If(Box::new(self.parse_if()?)))
            } else {
                Some(ElseBranch::Block(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(IfStmt {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn parse_return(&mut self) -> Result<ReturnStmt, ParseError> {
        self.expect(&Token::Return)?;
        let value = if self.at_expr_start() {
            Some(self.parse_expr(0)?)
        } else {
            None
        };
        Ok(ReturnStmt { value })
    }

    fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let kind = match self.advance() {
            Some(Token::Const) => DeclKind::Const,
            _ => DeclKind::Var,
        };
        let type_name = self.expect_ident("a type name")?;
        let name = self.expect_ident("an identifier")?;
        self.expect(&Token::Assign)?;
        let init = self.parse_expr(0)?;
        Ok(VarDecl {
            kind,
            type_name,
            name,
            init,
        })
    }

    fn at_expr_start(&self) -> bool {
        matches!(
            self.peek(),
            Some(
                Token::Int(_)
                    | Token::Ident(_)
                    | Token::True
                    | Token::False
                    | Token::LParen
                    | Token::Plus
                    | Token::Minus
                    | Token::Not
            )
        )
    }

    // ═══════════════════════════════════════════════════════════════════
    // Expressions
    // ═══════════════════════════════════════════════════════════════════

    /// Nesting of parentheses and prefix operators recurses here.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner(min_bp))
    }

    fn parse_expr_inner(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        while let Some((op, l_bp, r_bp)) = self.peek().and_then(infix_binding_power) {
            if l_bp < min_bp {
                break;
            }
            self.pos += 1;
            let right = self.parse_expr(r_bp)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let offset = self.offset();
        match self.advance() {
            Some(Token::Int(n)) => Ok(Expr::Int(n)),
            Some(Token::True) => Ok(Expr::Bool(true)),
            Some(Token::False) => Ok(Expr::Bool(false)),
            Some(Token::Ident(name)) => Ok(Expr::Ident(name)),
            Some(Token::LParen) => {
                let inner = self.parse_expr(0)?;
                self.expect(&Token::RParen)?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            Some(Token::Plus) => Ok(Expr::unary(UnaryOp::Plus, self.parse_expr(SIGN_BP)?)),
            Some(Token::Minus) => Ok(Expr::unary(UnaryOp::Neg, self.parse_expr(SIGN_BP)?)),
            Some(Token::Not) => Ok(Expr::unary(UnaryOp::Not, self.parse_expr(NOT_BP)?)),
            Some(other) => Err(ParseError::new(format!(
                "expected an expression, found `{}`",
                other
            ))
            .with_offset(offset)),
            None => Err(ParseError::new("expected an expression, found end of input")
                .with_offset(offset)),
        }
    }
}

/// Operator and (left, right) binding powers for an infix token.
fn infix_binding_power(token: &Token) -> Option<(BinaryOp, u8, u8)> {
    let (op, level) = match token {
        Token::Or => (BinaryOp::Or, 1),
        Token::Xor => (BinaryOp::Xor, 2),
        Token::And => (BinaryOp::And, 3),
        Token::EqEq => (BinaryOp::Eq, 5),
        Token::NotEq => (BinaryOp::Ne, 5),
        Token::Lt => (BinaryOp::Lt, 6),
        Token::LtEq => (BinaryOp::Le, 6),
        Token::Gt => (BinaryOp::Gt, 6),
        Token::GtEq => (BinaryOp::Ge, 6),
        Token::Shl => (BinaryOp::Shl, 7),
        Token::Shr => (BinaryOp::Shr, 7),
        Token::Plus => (BinaryOp::Add, 8),
        Token::Minus => (BinaryOp::Sub, 8),
        Token::Amp => (BinaryOp::Concat, 8),
        Token::Star => (BinaryOp::Mul, 9),
        Token::Slash => (BinaryOp::Div, 9),
        Token::Mod => (BinaryOp::Mod, 9),
        Token::Rem => (BinaryOp::Rem, 9),
        _ => return None,
    };
    // Left-associative: the right side binds one step tighter
    Some((op, level * 2, level * 2 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expr(source: &str) -> Expr {
        let program = parse(source).expect("parse failed");
        match program.stmts.as_slice() {
            [Stmt::Expr(e)] => e.clone(),
            other => panic!("expected a single expression, got {:?}", other),
        }
    }

    #[test]
    fn test_mul_binds_tighter_than_add() {
        assert_eq!(
            expr("1+2*3"),
            Expr::binary(
                BinaryOp::Add,
                Expr::int(1),
                Expr::binary(BinaryOp::Mul, Expr::int(2), Expr::int(3)),
            )
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            expr("5-2-1"),
            Expr::binary(
                BinaryOp::Sub,
                Expr::binary(BinaryOp::Sub, Expr::int(5), Expr::int(2)),
                Expr::int(1),
            )
        );
    }

    #[test]
    fn test_not_is_looser_than_comparison() {
        assert_eq!(
            expr("not 1 == 2"),
            Expr::unary(
                UnaryOp::Not,
                Expr::binary(BinaryOp::Eq, Expr::int(1), Expr::int(2)),
            )
        );
    }

    #[test]
    fn test_repeated_not() {
        assert_eq!(
            expr("not not true"),
            Expr::unary(UnaryOp::Not, Expr::unary(UnaryOp::Not, Expr::Bool(true)))
        );
    }

    #[test]
    fn test_sign_binds_tightest() {
        assert_eq!(
            expr("-1*2"),
            Expr::binary(
                BinaryOp::Mul,
                Expr::unary(UnaryOp::Neg, Expr::int(1)),
                Expr::int(2),
            )
        );
    }

    #[test]
    fn test_arithmetic_binds_tighter_than_comparison() {
        assert_eq!(
            expr("2-1 < 2"),
            Expr::binary(
                BinaryOp::Lt,
                Expr::binary(BinaryOp::Sub, Expr::int(2), Expr::int(1)),
                Expr::int(2),
            )
        );
    }

    #[test]
    fn test_statements_without_separators() {
        let program = parse("if (true) { if (true) { return 7 } return 9 }").unwrap();
        assert_eq!(program.stmts.len(), 1);
        let Stmt::If(outer) = &program.stmts[0] else {
            panic!("expected if");
        };
        assert_eq!(outer.then_branch.stmts.len(), 2);
        assert!(matches!(outer.then_branch.stmts[1], Stmt::Return(_)));
    }

    #[test]
    fn test_semicolon_separated_statements() {
        let program = parse("9; return 5*6; 9").unwrap();
        assert_eq!(program.stmts.len(), 3);
    }

    #[test]
    fn test_bare_return() {
        let program = parse("return;").unwrap();
        assert_eq!(
            program.stmts,
            vec![Stmt::Return(ReturnStmt { value: None })]
        );
    }

    #[test]
    fn test_else_if_chain() {
        let program = parse("if (false) { 1 } else if (true) { 2 } else { 3 }").unwrap();
        let Stmt::If(stmt) = &program.stmts[0] else {
            panic!("expected if");
        };
        assert!(matches!(stmt.else_branch, Some(ElseBranch::If(_))));
    }

    #[test]
    fn test_var_decl() {
        let program = parse("const integer x := 4").unwrap();
        assert_eq!(
            program.stmts,
            vec![Stmt::VarDecl(VarDecl {
                kind: DeclKind::Const,
                type_name: "integer".to_string(),
                name: "x".to_string(),
                init: Expr::int(4),
            })]
        );
    }

    #[test]
    fn test_missing_paren_reports_offset() {
        let err = parse("(1+2").unwrap_err();
        assert_eq!(err.message, "expected `)`, found end of input");
        assert_eq!(err.offset, Some(4));
    }

    #[test]
    fn test_unexpected_token() {
        let err = parse("1 + }").unwrap_err();
        assert_eq!(err.message, "expected an expression, found `}`");
        assert_eq!(err.offset, Some(4));
    }

    #[test]
    fn test_deeply_nested_blocks() {
        let depth = 3000;
        let source = format!("{}1{}", "{ ".repeat(depth), " }".repeat(depth));
        let program = parse(&source).expect("parse failed");

        let mut stmt = &program.stmts[0];
        let mut levels = 0;
        while let Stmt::Block(block) = stmt {
            levels += 1;
            stmt = &block.stmts[0];
        }
        assert_eq!(levels, depth);
        assert_eq!(stmt, &Stmt::Expr(Expr::int(1)));
    }

    #[test]
    fn test_deeply_nested_expressions() {
        let depth = 3000;
        let parens = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(parse(&parens).is_ok());

        let signs = format!("{}1", "- ".repeat(depth));
        assert!(parse(&signs).is_ok());

        let nots = format!("{}true", "not ".repeat(depth));
        assert!(parse(&nots).is_ok());
    }
}
