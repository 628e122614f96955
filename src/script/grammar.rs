//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::geometry::{Handle, Point};
use crate::script::ast::*;
use crate::script::lexer::Token;

/// Parse a gesture script into its syntax tree
pub fn parse(input: &str) -> Result<Script, Vec<crate::ParseError>> {
    let len = input.len();

    let token_iter = crate::script::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Split (Token, SimpleSpan) pairs into the stream chumsky consumes
    let token_stream = Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    script_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn script_parser<'a, I>() -> impl Parser<'a, I, Script, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Numbers may carry a leading minus sign
    let number = just(Token::Minus)
        .or_not()
        .then(select! { Token::Number(n) => n })
        .map(|(minus, n)| if minus.is_some() { -n } else { n });

    let string_literal = select! {
        Token::String(s) => s,
    };

    let pair = number
        .clone()
        .then_ignore(just(Token::Comma))
        .then(number.clone())
        .delimited_by(just(Token::ParenOpen), just(Token::ParenClose));

    let point = pair.clone().map(|(x, y)| Point::new(x, y));

    let spanned_point = point
        .clone()
        .map_with(|p, e| Spanned::new(p, span_range(&e.span())));

    // Two or more points joined by arrows
    let path = spanned_point
        .separated_by(just(Token::Arrow))
        .at_least(2)
        .collect::<Vec<_>>();

    let handle = select! {
        Token::Ident(s) => s,
    }
    .try_map(|code, span: SimpleSpan| {
        code.parse::<Handle>()
            .map(|h| Spanned::new(h, span_range(&span)))
            .map_err(|msg| Rich::custom(span, msg))
    });

    // `[on: "a", "b"]`, listing the selectors the pressed target matches
    let targets = just(Token::On)
        .ignore_then(just(Token::Colon))
        .ignore_then(
            string_literal
                .separated_by(just(Token::Comma))
                .at_least(1)
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .delimited_by(just(Token::BracketOpen), just(Token::BracketClose))
        .or_not()
        .map(Option::unwrap_or_default);

    let drag = just(Token::Drag)
        .ignore_then(path.clone())
        .then(targets.clone())
        .map(|(path, targets)| Statement::Drag { path, targets });

    let resize = just(Token::Resize)
        .ignore_then(handle.clone())
        .then(path)
        .map(|(handle, path)| Statement::Resize { handle, path });

    let press = just(Token::Press).ignore_then(choice((
        handle
            .then(point.clone())
            .map(|(handle, at)| Statement::PressResize { handle, at }),
        point
            .clone()
            .then(targets)
            .map(|(at, targets)| Statement::PressDrag { at, targets }),
    )));

    let move_to = just(Token::Move).ignore_then(point.clone()).map(Statement::Move);

    let position = just(Token::Position)
        .ignore_then(point)
        .map(Statement::Position);

    let size = just(Token::Size)
        .ignore_then(pair.clone())
        .map(|(width, height)| Statement::Size { width, height });

    let edges = just(Token::Edges)
        .ignore_then(
            number
                .clone()
                .then_ignore(just(Token::Comma))
                .then(number.clone())
                .then_ignore(just(Token::Comma))
                .then(number.clone())
                .then_ignore(just(Token::Comma))
                .then(number)
                .delimited_by(just(Token::ParenOpen), just(Token::ParenClose)),
        )
        .map(|(((left, top), right), bottom)| Statement::Edges {
            left,
            top,
            right,
            bottom,
        });

    let parent = just(Token::Parent).ignore_then(choice((
        just(Token::NoneKw).to(Statement::Parent(None)),
        pair.map(|size| Statement::Parent(Some(size))),
    )));

    let statement = choice((
        drag,
        resize,
        press,
        move_to,
        just(Token::Release).to(Statement::Release),
        position,
        size,
        edges,
        parent,
        just(Token::Activate).to(Statement::Activate),
        just(Token::Deactivate).to(Statement::Deactivate),
        just(Token::Deselect).to(Statement::Deselect),
    ))
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    statement
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|statements| Script { statements })
}
