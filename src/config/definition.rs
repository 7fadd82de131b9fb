use super::span::{Parse, ParseResult, Position, RawSpan};
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{not_line_ending, space0},
    combinator::{eof, opt},
    error::context,
    sequence::{delimited, preceded, tuple},
};
use nom_locate::position;

/// One `name = kind(column)` line.
#[derive(Debug, Eq, PartialEq)]
pub struct ParsedDefinition<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub column: &'a str,
    pub position: Position,
}

fn identifier(input: RawSpan<'_>) -> ParseResult<'_, &str> {
    let (input, value) =
        take_while1(|x: char| x.is_alphanumeric() || x == '_' || x == '.')(input)?;
    Ok((input, *value.fragment()))
}

fn comment(input: RawSpan<'_>) -> ParseResult<'_, RawSpan<'_>> {
    preceded(tag("#"), not_line_ending)(input)
}

/// Returns `true` for lines that carry no definition.
pub fn is_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

impl<'a> Parse<'a> for ParsedDefinition<'a> {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, _) = space0(input)?;
        let (input, pos) = position(input)?;

        let (input, name) = context("expected metric name", identifier)(input)?;
        let (input, _) = context("expected '='", delimited(space0, tag("="), space0))(input)?;
        let (input, kind) = context("expected aggregation", identifier)(input)?;
        let (input, _) = context("expected '('", delimited(space0, tag("("), space0))(input)?;
        let (input, column) = context("expected column", identifier)(input)?;
        let (input, _) = context("expected ')'", preceded(space0, tag(")")))(input)?;
        let (input, _) = context(
            "unexpected trailing input",
            tuple((space0, opt(comment), eof)),
        )(input)?;

        Ok((
            input,
            Self {
                name,
                kind,
                column,
                position: pos.into(),
            },
        ))
    }
}
