//! Lexer for gesture scripts using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Gesture keywords
    #[token("drag")]
    Drag,
    #[token("resize")]
    Resize,
    #[token("press")]
    Press,
    #[token("move")]
    Move,
    #[token("release")]
    Release,

    // Placement keywords
    #[token("position")]
    Position,
    #[token("size")]
    Size,
    #[token("edges")]
    Edges,
    #[token("parent")]
    Parent,
    #[token("none")]
    NoneKw,

    // Activation keywords
    #[token("activate")]
    Activate,
    #[token("deactivate")]
    Deactivate,
    #[token("deselect")]
    Deselect,

    // Target modifier key
    #[token("on")]
    On,

    #[token("->")]
    Arrow,
    #[token("-")]
    Minus,

    // Delimiters
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,

    /// Input no other token matches; no grammar rule accepts it
    Error,
}

/// Lex input string into tokens with spans.
///
/// Unrecognized input becomes [`Token::Error`] so the parser reports it
/// where it occurs.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Error), span))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_keywords() {
        let tokens: Vec<_> = lex("drag resize press move release").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Drag,
                Token::Resize,
                Token::Press,
                Token::Move,
                Token::Release
            ]
        );
    }

    #[test]
    fn test_placement_keywords() {
        let tokens: Vec<_> = lex("position size edges parent none").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Position,
                Token::Size,
                Token::Edges,
                Token::Parent,
                Token::NoneKw
            ]
        );
    }

    #[test]
    fn test_arrow_and_minus() {
        let tokens: Vec<_> = lex("-> - ->").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Arrow, Token::Minus, Token::Arrow]);
    }

    #[test]
    fn test_point_tokens() {
        let tokens: Vec<_> = lex("(-10, 2.5)").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::ParenOpen,
                Token::Minus,
                Token::Number(10.0),
                Token::Comma,
                Token::Number(2.5),
                Token::ParenClose
            ]
        );
    }

    #[test]
    fn test_handle_codes_are_identifiers() {
        let tokens: Vec<_> = lex("resize br").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Resize, Token::Ident("br".to_string())]);
    }

    #[test]
    fn test_target_modifier() {
        let tokens: Vec<_> = lex(r#"[on: "title"]"#).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::BracketOpen,
                Token::On,
                Token::Colon,
                Token::String("title".to_string()),
                Token::BracketClose
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens: Vec<_> = lex("dragging").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Ident("dragging".to_string())]);
    }

    #[test]
    fn test_comments_skipped() {
        let tokens: Vec<_> = lex("release // done\n/* block */ activate")
            .map(|(t, _)| t)
            .collect();
        assert_eq!(tokens, vec![Token::Release, Token::Activate]);
    }

    #[test]
    fn test_unrecognized_input_kept_as_error() {
        let tokens: Vec<_> = lex("(.5 @ 2)").collect();
        assert_eq!(
            tokens,
            vec![
                (Token::ParenOpen, 0..1),
                (Token::Error, 1..2),
                (Token::Number(5.0), 2..3),
                (Token::Error, 4..5),
                (Token::Number(2.0), 6..7),
                (Token::ParenClose, 7..8),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let spans: Vec<_> = lex("move (1, 2)").map(|(_, s)| s).collect();
        assert_eq!(spans[0], 0..4);
        assert_eq!(spans[1], 5..6);
    }
}
