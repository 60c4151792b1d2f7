//! Lexer for the TTCN-3 subset using logos

use std::fmt;
use std::ops::Range;

use logos::Logos;
use num_bigint::BigInt;

use crate::frontend::ParseError;

/// Token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token {
    // === Keywords ===
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("var")]
    Var,
    #[token("const")]
    Const,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("not")]
    Not,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("xor")]
    Xor,
    #[token("mod")]
    Mod,
    #[token("rem")]
    Rem,

    // === Literals ===
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<BigInt>().ok())]
    Int(BigInt),

    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token(":=")]
    Assign,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semi,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            other => f.write_str(other.spelling()),
        }
    }
}

impl Token {
    fn spelling(&self) -> &'static str {
        match self {
            Token::If => "if",
            Token::Else => "else",
            Token::Return => "return",
            Token::Var => "var",
            Token::Const => "const",
            Token::True => "true",
            Token::False => "false",
            Token::Not => "not",
            Token::And => "and",
            Token::Or => "or",
            Token::Xor => "xor",
            Token::Mod => "mod",
            Token::Rem => "rem",
            Token::Int(_) => "integer literal",
            Token::Ident(_) => "identifier",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Amp => "&",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Lt => "<",
            Token::LtEq => "<=",
            Token::Gt => ">",
            Token::GtEq => ">=",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::Assign => ":=",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Semi => ";",
        }
    }
}

/// A token together with its byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    /// The token
    pub token: Token,
    /// Byte range in the source
    pub span: Range<usize>,
}

/// Split `source` into tokens.
///
/// # Errors
///
/// Returns a [`ParseError`] at the first character no token matches.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push(SpannedToken { token, span }),
            Err(()) => {
                return Err(ParseError::new(format!(
                    "unexpected character `{}`",
                    lexer.slice()
                ))
                .with_offset(span.start));
            }
        }
    }

    Ok(tokens)
}
