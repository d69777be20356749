use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `elseif`
    #[token("elseif")]
    ElseIf,
    /// `end`
    #[token("end")]
    End,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `for`
    #[token("for")]
    For,
    /// `function`
    #[token("function")]
    Function,
    /// `local`
    #[token("local")]
    Local,
    /// `return`
    #[token("return")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Identifier tokens; variable or function names such as `x` or `greet`.
    /// Interior dots are part of the name, so `math.random` is one token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(\.[a-zA-Z_][a-zA-Z0-9_]*)*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The raw lexeme is kept as-is: the lexer accepts any run of digits and
    /// dots, and conversion to a number happens during evaluation. A lexically
    /// fine literal like `1.2.3` therefore fails only when it is evaluated.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens, delimited by matching `"` or `'`.
    /// No escape sequences are processed.
    #[regex(r#""[^"]*""#, strip_quotes)]
    #[regex(r"'[^']*'", strip_quotes)]
    Str(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `~=`
    #[token("~=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `~`
    #[token("~")]
    Tilde,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Marks the end of the token sequence. [`tokenize`] appends it after the
    /// last real token; a NUL byte in the source also ends the input.
    #[token("\0")]
    EndOfInput,
}

/// Strips the surrounding quote characters from a string literal slice.
fn strip_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::If => write!(f, "if"),
            Self::Then => write!(f, "then"),
            Self::Else => write!(f, "else"),
            Self::ElseIf => write!(f, "elseif"),
            Self::End => write!(f, "end"),
            Self::While => write!(f, "while"),
            Self::Do => write!(f, "do"),
            Self::For => write!(f, "for"),
            Self::Function => write!(f, "function"),
            Self::Local => write!(f, "local"),
            Self::Return => write!(f, "return"),
            Self::Break => write!(f, "break"),
            Self::Nil => write!(f, "nil"),
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Str(text) => write!(f, "\"{text}\""),
            Self::EqualEqual => write!(f, "=="),
            Self::NotEqual => write!(f, "~="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::Equals => write!(f, "="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Tilde => write!(f, "~"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::EndOfInput => write!(f, "<end of input>"),
        }
    }
}

/// Converts one unit of source text into a finite, ordered token sequence.
///
/// The sequence always terminates with [`Token::EndOfInput`]. Lexing is
/// all-or-nothing: the first invalid character or unterminated string aborts
/// the whole unit, there is no recovery mid-sequence. The sequence grows as
/// needed and is bounded only by available memory.
///
/// # Parameters
/// - `source`: The raw source text of one REPL line or one loaded script.
///
/// # Returns
/// The classified token sequence.
///
/// # Errors
/// - `ParseError::UnterminatedString` if a `"` or `'` literal is never closed.
/// - `ParseError::InvalidCharacter` for any character outside the language.
///
/// # Example
/// ```
/// use lunula::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("local x = 1").unwrap();
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens.last(), Some(&Token::EndOfInput));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(match lexer.slice().chars().next() {
                    Some('"' | '\'') => ParseError::UnterminatedString,
                    Some(character) => ParseError::InvalidCharacter { character },
                    None => ParseError::UnterminatedString,
                });
            },
        }
    }

    tokens.push(Token::EndOfInput);
    Ok(tokens)
}
