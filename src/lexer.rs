use logos::Logos;

use crate::error::Error;
use crate::token::{Pos, Token, TokenKind};

#[derive(Logos, Debug, PartialEq)]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("//")]
    FloorDiv,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LessEq,
    #[token(">=")]
    GreaterEq,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("=")]
    Assign,
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Word,
    #[regex(r"\r\n|\n|\r")]
    Newline,
    // Not skipped: leading runs are measured for indentation.
    #[regex(r"[ \t]+")]
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BracketKind {
    Paren,
    Square,
}

pub struct Lexer<'a> {
    src: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }

    /// Tokenizes the whole source. The result always ends in exactly one
    /// `Eof`, preceded by one `Dedent` per indentation level still open.
    pub fn lex(&self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        let mut indent_stack: Vec<usize> = vec![0];
        let mut brackets: Vec<BracketKind> = Vec::new();
        let mut line = 1usize;
        let mut line_start = 0usize;
        let mut at_line_start = true;
        let mut indent_width = 0usize;

        let mut lex = RawToken::lexer(self.src);
        while let Some(raw) = lex.next() {
            let span = lex.span();
            let pos = Pos::new(line, span.start - line_start);
            let slice = &self.src[span.start..span.end];
            let raw = match raw {
                Ok(t) => t,
                Err(()) => {
                    let message = if slice == "/" {
                        "Invalid character '/' (did you mean '//' for integer division?)"
                            .to_string()
                    } else {
                        format!("Invalid character '{slice}'")
                    };
                    return Err(Error::lexical(pos, message));
                }
            };

            // Indentation is only significant at the first real token of a
            // line, and only outside brackets.
            let brackets_were_empty = brackets.is_empty();

            let kind = match raw {
                RawToken::Blank => {
                    if at_line_start {
                        for ch in slice.chars() {
                            // A tab counts as four columns.
                            indent_width += if ch == '\t' { 4 } else { 1 };
                        }
                    }
                    continue;
                }
                RawToken::Newline => {
                    tokens.push(Token::new(TokenKind::Newline, pos));
                    line += 1;
                    line_start = span.end;
                    at_line_start = true;
                    indent_width = 0;
                    continue;
                }
                RawToken::LParen => {
                    brackets.push(BracketKind::Paren);
                    TokenKind::LeftParen
                }
                RawToken::RParen => {
                    if brackets.pop() != Some(BracketKind::Paren) {
                        return Err(Error::lexical(pos, "Mismatched parenthesis"));
                    }
                    TokenKind::RightParen
                }
                RawToken::LBracket => {
                    brackets.push(BracketKind::Square);
                    TokenKind::LeftBracket
                }
                RawToken::RBracket => {
                    if brackets.pop() != Some(BracketKind::Square) {
                        return Err(Error::lexical(pos, "Mismatched brackets"));
                    }
                    TokenKind::RightBracket
                }
                RawToken::Colon => TokenKind::Colon,
                RawToken::Dot => TokenKind::Dot,
                RawToken::Plus => TokenKind::Plus,
                RawToken::Minus => TokenKind::Minus,
                RawToken::Star => TokenKind::Star,
                RawToken::FloorDiv => TokenKind::FloorDiv,
                RawToken::EqEq => TokenKind::EqEq,
                RawToken::NotEq => TokenKind::NotEq,
                RawToken::Less => TokenKind::Less,
                RawToken::LessEq => TokenKind::LessEq,
                RawToken::Greater => TokenKind::Greater,
                RawToken::GreaterEq => TokenKind::GreaterEq,
                RawToken::Assign => TokenKind::Assign,
                RawToken::Number => {
                    if slice.len() > 1 && slice.starts_with('0') {
                        return Err(Error::lexical(
                            pos,
                            "Invalid integer value: leading zeros are not allowed",
                        ));
                    }
                    let value = slice.parse::<i32>().map_err(|_| {
                        Error::lexical(pos, format!("Invalid integer value: '{slice}'"))
                    })?;
                    TokenKind::Number(value)
                }
                RawToken::Word => classify_word(slice),
            };

            if at_line_start {
                at_line_start = false;
                if brackets_were_empty {
                    balance_indent(&mut indent_stack, indent_width, pos, &mut tokens)?;
                }
                indent_width = 0;
            }
            tokens.push(Token::new(kind, pos));
        }

        let end = Pos::new(line, self.src.len() - line_start);
        if !brackets.is_empty() {
            return Err(Error::lexical(end, "Mismatched parenthesis or brackets"));
        }
        while indent_stack.len() > 1 {
            indent_stack.pop();
            tokens.push(Token::new(TokenKind::Dedent, end));
        }
        tokens.push(Token::new(TokenKind::Eof, end));
        Ok(tokens)
    }
}

/// Compares a line's leading width against the stack of open levels, emitting
/// `Indent`/`Dedent` tokens. After popping, the width must land exactly on a
/// previously opened level.
fn balance_indent(
    stack: &mut Vec<usize>,
    width: usize,
    pos: Pos,
    tokens: &mut Vec<Token>,
) -> Result<(), Error> {
    let top = stack.last().copied().unwrap_or(0);
    if width > top {
        stack.push(width);
        tokens.push(Token::new(TokenKind::Indent, pos));
        return Ok(());
    }
    while stack.last().copied().unwrap_or(0) > width {
        stack.pop();
        tokens.push(Token::new(TokenKind::Dedent, pos));
    }
    if stack.last().copied().unwrap_or(0) != width {
        return Err(Error::indentation(pos, "Invalid indentation level"));
    }
    Ok(())
}

fn classify_word(word: &str) -> TokenKind {
    match word {
        "if" => TokenKind::If,
        "elif" => TokenKind::Elif,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "continue" => TokenKind::Continue,
        "break" => TokenKind::Break,
        "list" => TokenKind::List,
        "append" => TokenKind::Append,
        "print" => TokenKind::Print,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "not" => TokenKind::Not,
        "True" => TokenKind::Bool(true),
        "False" => TokenKind::Bool(false),
        _ => TokenKind::Identifier(word.to_string()),
    }
}
