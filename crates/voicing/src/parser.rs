//! Text literal parsing using winnow combinators.
//!
//! These parsers only split text into tokens. Name lookups happen in the
//! value types themselves so that unknown names surface as
//! [`Error::UnknownName`](crate::Error::UnknownName) rather than as a
//! generic syntax error.

use winnow::ascii::space0;
use winnow::combinator::{delimited, opt, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::error::{Error, Result};

type PResult<T> = winnow::ModalResult<T>;

/// Parse a pitch-class name: a letter A-G with an optional `#` or `b`.
pub fn parse_pitch_class(input: &mut &str) -> PResult<String> {
    let letter = one_of(['C', 'D', 'E', 'F', 'G', 'A', 'B']).parse_next(input)?;
    let accidental = opt(one_of(['#', 'b'])).parse_next(input)?;
    let mut name = String::with_capacity(2);
    name.push(letter);
    if let Some(accidental) = accidental {
        name.push(accidental);
    }
    Ok(name)
}

/// Parse an optionally negative decimal integer, returning its text.
pub fn parse_signed<'s>(input: &mut &'s str) -> PResult<&'s str> {
    let start = *input;
    opt('-').parse_next(input)?;
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    Ok(&start[..start.len() - input.len()])
}

/// Parse an interval name such as `P5`, `m7`, `T` or `P8`.
pub fn parse_interval_name<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)
}

/// Parse the `(octave)` suffix used by compound intervals.
fn parse_octave_suffix<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited('(', parse_signed, ')').parse_next(input)
}

/// Parse a `<name><octave>` pitch literal such as `C4`, `F#3` or `Bb-1`.
pub fn parse_pitch<'s>(input: &mut &'s str) -> PResult<(String, &'s str)> {
    let name = parse_pitch_class(input)?;
    let octave = parse_signed(input)?;
    Ok((name, octave))
}

/// Parse an interval literal: a bare name or `name(octave)`.
pub fn parse_interval<'s>(input: &mut &'s str) -> PResult<(&'s str, Option<&'s str>)> {
    let name = parse_interval_name(input)?;
    let octave = opt(parse_octave_suffix).parse_next(input)?;
    Ok((name, octave))
}

/// Parse one CSV field, tolerating surrounding spaces.
fn parse_field<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited(space0, parse_signed, space0).parse_next(input)
}

/// Parse a comma separated list of integers.
pub fn parse_csv<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
    separated(1.., parse_field, ',').parse_next(input)
}

/// Run `parser` over the whole of `text`, rejecting leftover input.
fn complete<'s, O>(
    text: &'s str,
    expected: &'static str,
    mut parser: impl FnMut(&mut &'s str) -> PResult<O>,
) -> Result<O> {
    let mut input = text;
    match parser(&mut input) {
        Ok(value) if input.is_empty() => Ok(value),
        _ => Err(Error::invalid(expected, text)),
    }
}

fn to_int(text: &str, expected: &'static str) -> Result<i32> {
    text.parse().map_err(|_| Error::invalid(expected, text))
}

/// Split a pitch literal into its name and octave.
pub fn pitch_literal(text: &str) -> Result<(String, i32)> {
    let (name, octave) = complete(text, "a pitch like 'C4'", parse_pitch)?;
    Ok((name, to_int(octave, "an octave number")?))
}

/// Split an interval literal into its name and octave (0 when absent).
pub fn interval_literal(text: &str) -> Result<(&str, i32)> {
    let (name, octave) = complete(text, "an interval like 'P5' or 'P5(1)'", parse_interval)?;
    let octave = match octave {
        Some(octave) => to_int(octave, "an octave number")?,
        None => 0,
    };
    Ok((name, octave))
}

/// Decode a comma separated list of integers.
pub fn csv_values(text: &str) -> Result<Vec<i32>> {
    complete(text, "comma separated integers", parse_csv)?
        .into_iter()
        .map(|field| to_int(field, "an integer"))
        .collect()
}
