use logos::Logos;

pub type Lexer<'a> = logos::Lexer<'a, TokenKind>;

pub fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s)
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[0-9]+")]
    Digits,

    #[token("d")]
    Dice,
    // Shorthand for `d6`; only the capital letter counts.
    #[token("D")]
    SixSided,
    #[token("f")]
    #[token("F")]
    Fudge,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}
