//! Header and footer grammar.
//!
//! Both rules run against the full message independently; the parser carves
//! the body out of whatever lies between their spans.

use std::ops::Range;

use winnow::ascii::line_ending;
use winnow::combinator::{alt, delimited, eof, opt, preceded, repeat, separated, terminated, trace};
use winnow::error::{ModalResult, StrContext};
use winnow::token::{literal, take_till, take_while};
use winnow::Parser as _;

use crate::footer::BREAKING_PHRASE;

/// The decomposed first line of a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Header<'i> {
    /// Byte range of the header within the message, always starting at 0.
    pub(crate) span: Range<usize>,
    pub(crate) ty: &'i str,
    pub(crate) scope: Option<&'i str>,
    pub(crate) exclamation: bool,
    pub(crate) description: &'i str,
}

/// The trailing footer block of a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FooterBlock<'i> {
    /// Byte range of the block, including the blank line in front of it and
    /// running to the end of the message.
    pub(crate) span: Range<usize>,
    pub(crate) entries: Vec<(&'i str, &'i str)>,
}

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
// <newline>         ::= [<CR>], <LF>
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Match the header at the start of `message`.
///
/// Types are tried in the order given and the first one producing a complete
/// header wins, so with both `fix` and `fixup` configured, `fixup: x` only
/// resolves to `fixup` because `fix` cannot complete the header.
pub(crate) fn header<'i, T: AsRef<str>>(message: &'i str, types: &[T]) -> Option<Header<'i>> {
    types.iter().find_map(|ty| {
        let mut input = message;
        summary(ty.as_ref(), &mut input).ok()
    })
}

// <summary>         ::= <type>, "(", <scope>, ")", ["!"], ": ", <text>
//                    |  <type>, ["!"], ": ", <text>
fn summary<'i>(ty: &str, input: &mut &'i str) -> ModalResult<Header<'i>> {
    trace(
        "summary",
        (
            literal(ty).context(StrContext::Label("type")),
            opt(delimited('(', scope, ')')),
            opt('!'),
            preceded(": ", description),
        )
            .with_taken(),
    )
    .map(|((ty, scope, bang, description), raw)| Header {
        span: 0..raw.len(),
        ty,
        scope,
        exclamation: bang.is_some(),
        description,
    })
    .parse_next(input)
}

// <scope>           ::= <any UTF8-octets except newline or ")">+
fn scope<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    trace(
        "scope",
        take_while(1.., |c: char| !is_line_ending(c) && c != ')'),
    )
    .context(StrContext::Label("scope"))
    .parse_next(input)
}

// <description>     ::= <text> containing at least one non-whitespace character
fn description<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    trace("description", text.verify(|d: &str| !d.trim().is_empty()))
        .context(StrContext::Label("description"))
        .parse_next(input)
}

// <text>            ::= <any UTF8-octets except newline>+
fn text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(1.., is_line_ending).parse_next(input)
}

/// Find the footer block that closes `message`, if any.
///
/// Candidates start at each line break; the leftmost one that parses to the
/// end of the message is the block. A blank line cannot appear inside a
/// block, so at most one candidate succeeds.
pub(crate) fn footer_block(message: &str) -> Option<FooterBlock<'_>> {
    message
        .char_indices()
        .filter(|&(_, c)| is_line_ending(c))
        .find_map(|(start, _)| {
            let mut input = &message[start..];
            block(&mut input).ok().map(|entries| FooterBlock {
                span: start..message.len(),
                entries,
            })
        })
}

// <footer-block>    ::= <newline>, <newline>, <footer>, (<newline>, <footer>)*, <newline>*
fn block<'i>(input: &mut &'i str) -> ModalResult<Vec<(&'i str, &'i str)>> {
    trace(
        "footer_block",
        delimited(
            (line_ending, line_ending),
            separated(1.., footer, line_ending),
            (trailing_newlines, eof),
        ),
    )
    .parse_next(input)
}

fn trailing_newlines(input: &mut &str) -> ModalResult<()> {
    repeat(0.., line_ending).parse_next(input)
}

// <footer>          ::= <token>, ": ", <text>
fn footer<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    trace(
        "footer",
        (
            alt((terminated(BREAKING_PHRASE, ": "), terminated(token, ": "))),
            text.context(StrContext::Label("value")),
        ),
    )
    .parse_next(input)
}

// <token>           ::= <breaking-change>
//                    |  <any UTF8-octets except newline or " " or ":">+
fn token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !is_line_ending(c) && c != ' ' && c != ':')
        .context(StrContext::Label("token"))
        .parse_next(input)
}
