use winnow::{
    Result as WResult,
    ascii::{digit1, line_ending, space0, space1, till_line_ending},
    combinator::{alt, opt, separated},
    prelude::*,
};

use crate::Sample;

pub fn parse_samples(i: &mut &str) -> WResult<Vec<Sample>> {
    let lines: Vec<Option<Sample>> = separated(0.., line, line_ending).parse_next(i)?;
    Ok(lines.into_iter().flatten().collect())
}

/// A sample, a comment, or nothing at all.
fn line(i: &mut &str) -> WResult<Option<Sample>> {
    ignore_ws(i);
    let parsed = opt(alt((comment.map(|_| None), sample.map(Some)))).parse_next(i)?;
    ignore_ws(i);
    Ok(parsed.flatten())
}

fn comment(i: &mut &str) -> WResult<()> {
    ('#', till_line_ending).void().parse_next(i)
}

// 100, 0.25
fn sample(i: &mut &str) -> WResult<Sample> {
    (size, separator, seconds)
        .map(|(size, _, seconds)| Sample { size, seconds })
        .parse_next(i)
}

fn separator(i: &mut &str) -> WResult<()> {
    alt(((space0, ',', space0).void(), space1.void())).parse_next(i)
}

fn size(i: &mut &str) -> WResult<usize> {
    digit1
        .verify_map(|s: &str| s.parse::<usize>().ok())
        .parse_next(i)
}

fn seconds(i: &mut &str) -> WResult<f64> {
    winnow::ascii::float
        .verify(|s: &f64| s.is_finite() && *s >= 0.0)
        .parse_next(i)
}

fn ws(i: &mut &str) -> WResult<()> {
    space0.parse_next(i).map(|_| ())
}

fn ignore_ws(i: &mut &str) {
    let _ = ws.parse_next(i);
}
