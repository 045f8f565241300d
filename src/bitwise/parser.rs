// Parser combinators using nom for the two binary literal syntaxes:
// "0b00010000" and "[0001 0000]"

use super::error::{BitsError, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, one_of},
    combinator::{all_consuming, map, recognize},
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};
use num::{BigInt, Num};

fn is_digit_or_underscore(c: char) -> bool {
    matches!(c, '0' | '1' | '_')
}

fn is_digit_or_space(c: char) -> bool {
    matches!(c, '0' | '1' | ' ')
}

/// Parse a `0b`-prefixed literal, returning its digits with underscores removed
pub fn prefixed_literal(input: &str) -> IResult<&str, String> {
    map(
        preceded(
            tag("0b"),
            recognize(pair(one_of("01"), take_while(is_digit_or_underscore))),
        ),
        |digits: &str| digits.replace('_', ""),
    )
    .parse(input)
}

/// Parse a bracketed literal such as `[0001 0000]`, returning its digits with spaces removed
pub fn bracketed_literal(input: &str) -> IResult<&str, String> {
    map(
        delimited(char('['), take_while(is_digit_or_space), char(']')),
        |body: &str| body.replace(' ', ""),
    )
    .parse(input)
}

/// Parse either binary literal syntax into a non-negative integer.
/// Surrounding whitespace is ignored.
pub fn parse(input: &str) -> Result<BigInt> {
    let digits = match all_consuming(alt((prefixed_literal, bracketed_literal))).parse(input.trim())
    {
        Ok((_, digits)) if !digits.is_empty() => digits,
        _ => return Err(BitsError::Format(input.to_string())),
    };

    BigInt::from_str_radix(&digits, 2).map_err(|_| BitsError::Format(input.to_string()))
}
