//! Lexer for the attribute text of an opening tag using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    #[token("=")]
    Equals,

    // Trailing slash of a self-closing tag
    #[token("/")]
    Slash,

    #[regex(r"[a-zA-Z_:][a-zA-Z0-9_:.\-]*", |lex| lex.slice().to_string())]
    Name(String),

    // Quotes are stripped; the value is otherwise verbatim
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    #[regex(r"'[^']*'", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    Value(String),
}

/// A `name="value"` pair from an opening tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub span: Span,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Collect every valued attribute from the attribute text of an opening tag
///
/// Attributes without a value (`<svg hidden>`) and unlexable text are skipped.
pub fn attributes(input: &str) -> Vec<Attribute> {
    let mut tokens = lex(input).peekable();
    let mut attrs = Vec::new();

    while let Some((token, span)) = tokens.next() {
        let Token::Name(name) = token else {
            continue;
        };
        if tokens.next_if(|(t, _)| *t == Token::Equals).is_none() {
            continue;
        }
        if let Some((Token::Value(value), value_span)) =
            tokens.next_if(|(t, _)| matches!(t, Token::Value(_)))
        {
            attrs.push(Attribute {
                name,
                value,
                span: span.start..value_span.end,
            });
        }
    }

    attrs
}

/// Find the value of the first attribute named exactly `name`
pub fn find_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.as_str())
}
