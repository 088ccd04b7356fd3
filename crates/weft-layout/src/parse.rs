//! Track list parsing.
//!
//! Accepts the compact notation used in grid definitions:
//! `"120px, auto, *, 2*"`. Items are separated by commas and/or whitespace.
//! A bare number is a pixel track.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, map_res, opt, recognize, value},
    sequence::{pair, tuple},
    IResult,
};
use weft_core::LayoutError;

use crate::track::TrackDefinition;

/// Parse a number (integer or decimal, optionally negative).
fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        str::parse::<f64>,
    )(input)
}

fn sized_track(input: &str) -> IResult<&str, TrackDefinition> {
    map(
        pair(
            number,
            opt(alt((value(true, char('*')), value(false, tag_no_case("px"))))),
        ),
        |(n, star)| match star {
            Some(true) => TrackDefinition::Star(n),
            Some(false) | None => TrackDefinition::Pixel(n),
        },
    )(input)
}

fn track(input: &str) -> IResult<&str, TrackDefinition> {
    alt((
        value(TrackDefinition::Auto, tag_no_case("auto")),
        value(TrackDefinition::Star(1.0), char('*')),
        sized_track,
    ))(input)
}

fn separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((multispace0, char(','), multispace0))),
        multispace1,
    ))(input)
}

/// Parse a list of track definitions.
///
/// An empty or all-whitespace string yields an empty list. On failure the
/// error carries the byte offset of the first item that could not be read.
pub fn parse_track_list(input: &str) -> Result<Vec<TrackDefinition>, LayoutError> {
    let error_at = |rest: &str| LayoutError::InvalidTrackList {
        input: input.to_string(),
        position: input.len() - rest.len(),
    };

    let mut rest = input.trim_start();
    let mut tracks = Vec::new();
    if rest.is_empty() {
        return Ok(tracks);
    }

    loop {
        let (after, parsed) = track(rest).map_err(|_| error_at(rest))?;
        tracks.push(parsed);
        if after.trim_end().is_empty() {
            break;
        }
        let (next, _) = separator(after).map_err(|_| error_at(after))?;
        rest = next;
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_list() {
        let tracks = parse_track_list("120px, auto, *, 2*").unwrap();
        assert_eq!(
            tracks,
            vec![
                TrackDefinition::Pixel(120.0),
                TrackDefinition::Auto,
                TrackDefinition::Star(1.0),
                TrackDefinition::Star(2.0),
            ]
        );
    }

    #[test]
    fn test_parse_whitespace_separated() {
        let tracks = parse_track_list("  Auto 40\t1.5*  ").unwrap();
        assert_eq!(
            tracks,
            vec![
                TrackDefinition::Auto,
                TrackDefinition::Pixel(40.0),
                TrackDefinition::Star(1.5),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_track_list(""), Ok(vec![]));
        assert_eq!(parse_track_list("   "), Ok(vec![]));
    }

    #[test]
    fn test_parse_keeps_negative_values_for_clamping() {
        let tracks = parse_track_list("-10, -2*").unwrap();
        assert_eq!(
            tracks,
            vec![TrackDefinition::Pixel(-10.0), TrackDefinition::Star(-2.0)]
        );
    }

    #[test]
    fn test_parse_error_position() {
        assert_eq!(
            parse_track_list("auto, bogus"),
            Err(LayoutError::InvalidTrackList {
                input: "auto, bogus".to_string(),
                position: 6,
            })
        );
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = parse_track_list("auto*").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidTrackList {
                input: "auto*".to_string(),
                position: 4,
            }
        );
    }

    #[test]
    fn test_parse_rejects_trailing_comma() {
        let err = parse_track_list("auto,").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidTrackList {
                input: "auto,".to_string(),
                position: 5,
            }
        );
    }

    #[test]
    fn test_round_trips_display() {
        let source = "100px, auto, *, 3*";
        let tracks = parse_track_list(source).unwrap();
        assert_eq!(crate::track::format_track_list(&tracks), source);
    }
}
