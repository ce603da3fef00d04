//! printf-style templates over an `(int, int, number)` triple.
//!
//! Supported conversions are `%d`/`%i`/`%u` (integer, fractions truncated),
//! `%f`/`%F` (fixed point, precision defaults to 6), `%s` (default numeric
//! text) and `%%`. Flags `-`, `+`, space, `0` and `#`, a field width and a
//! precision are accepted in the usual positions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::Hms;
use crate::error::TimerError;

const MAX_CONVERSIONS: usize = 3;
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// A parsed hours/minutes/seconds template.
#[derive(Debug, Clone, PartialEq)]
pub struct HmsFormat {
    template: String,
    pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Literal(String),
    Conversion(Conversion),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Integer,
    Float,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Conversion {
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    kind: Kind,
}

#[derive(Debug, Clone, Copy)]
enum Arg {
    Int(u64),
    Num(f64),
}

impl HmsFormat {
    /// Parse a printf-style template.
    ///
    /// # Errors
    /// Returns [`TimerError::InvalidTemplate`] for a dangling `%`, an
    /// unsupported conversion, or more than three conversions.
    pub fn parse(template: &str) -> Result<Self, TimerError> {
        let invalid = |reason: String| TimerError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut conversions = 0;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }

            let mut flags = Flags::default();
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => flags.left = true,
                    '0' => flags.zero = true,
                    '+' => flags.plus = true,
                    ' ' => flags.space = true,
                    '#' => {}
                    _ => break,
                }
                chars.next();
            }

            let width = take_number(&mut chars);
            let precision = if chars.peek() == Some(&'.') {
                chars.next();
                Some(take_number(&mut chars).unwrap_or(0))
            } else {
                None
            };

            let kind = match chars.next() {
                Some('d' | 'i' | 'u') => Kind::Integer,
                Some('f' | 'F') => Kind::Float,
                Some('s') => Kind::Text,
                Some(other) => return Err(invalid(format!("unsupported conversion %{}", other))),
                None => return Err(invalid("incomplete conversion at end of template".into())),
            };

            conversions += 1;
            if conversions > MAX_CONVERSIONS {
                return Err(invalid(format!(
                    "expects at most {} values (hours, minutes, seconds)",
                    MAX_CONVERSIONS
                )));
            }

            if !literal.is_empty() {
                pieces.push(Piece::Literal(std::mem::take(&mut literal)));
            }
            pieces.push(Piece::Conversion(Conversion {
                flags,
                width,
                precision,
                kind,
            }));
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self {
            template: template.to_string(),
            pieces,
        })
    }

    /// The built-in `HH:MM:SS` or `HH:MM:SS.ffffff` template.
    pub(crate) fn builtin(fractional: bool) -> Self {
        let two_digits = Conversion {
            flags: Flags {
                zero: true,
                ..Flags::default()
            },
            width: Some(2),
            precision: None,
            kind: Kind::Integer,
        };
        let seconds = if fractional {
            Conversion {
                width: Some(9),
                precision: Some(6),
                kind: Kind::Float,
                ..two_digits
            }
        } else {
            two_digits
        };

        Self {
            template: super::default_format_spec(Some(fractional)).to_string(),
            pieces: vec![
                Piece::Conversion(two_digits),
                Piece::Literal(":".into()),
                Piece::Conversion(two_digits),
                Piece::Literal(":".into()),
                Piece::Conversion(seconds),
            ],
        }
    }

    /// The template text this format was parsed from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render an hours/minutes/seconds triple.
    pub fn render(&self, hms: &Hms) -> String {
        let mut args = [
            Arg::Int(hms.hours),
            Arg::Int(hms.minutes),
            Arg::Num(hms.seconds),
        ]
        .into_iter();

        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                // Missing arguments render as zero, like C's printf with a short list.
                Piece::Conversion(conversion) => {
                    out.push_str(&conversion.apply(args.next().unwrap_or(Arg::Int(0))))
                }
            }
        }
        out
    }
}

impl Conversion {
    fn apply(&self, arg: Arg) -> String {
        let (negative, body) = match self.kind {
            Kind::Integer => {
                let (negative, digits) = match arg {
                    Arg::Int(value) => (false, value.to_string()),
                    Arg::Num(value) => {
                        let truncated = value.trunc();
                        (truncated < 0.0, format!("{:.0}", truncated.abs()))
                    }
                };
                let digits = match self.precision {
                    Some(min_digits) if digits.len() < min_digits => {
                        format!("{}{}", "0".repeat(min_digits - digits.len()), digits)
                    }
                    _ => digits,
                };
                (negative, digits)
            }
            Kind::Float => {
                let value = match arg {
                    Arg::Int(value) => value as f64,
                    Arg::Num(value) => value,
                };
                let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                (
                    value.is_sign_negative() && value != 0.0,
                    format!("{:.*}", precision, value.abs()),
                )
            }
            Kind::Text => {
                let text = match arg {
                    Arg::Int(value) => value.to_string(),
                    Arg::Num(value) => super::format_seconds(value),
                };
                let text = match self.precision {
                    Some(limit) => text.chars().take(limit).collect(),
                    None => text,
                };
                return self.pad("", text, false);
            }
        };

        let sign = if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        let zero_fill = self.flags.zero && !(self.kind == Kind::Integer && self.precision.is_some());
        self.pad(sign, body, zero_fill)
    }

    fn pad(&self, sign: &str, body: String, zero_fill: bool) -> String {
        let len = sign.len() + body.chars().count();
        let fill = self.width.unwrap_or(0).saturating_sub(len);
        if fill == 0 {
            return format!("{}{}", sign, body);
        }
        if self.flags.left {
            format!("{}{}{}", sign, body, " ".repeat(fill))
        } else if zero_fill {
            format!("{}{}{}", sign, "0".repeat(fill), body)
        } else {
            format!("{}{}{}", " ".repeat(fill), sign, body)
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    value
}

impl FromStr for HmsFormat {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for HmsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(hours: u64, minutes: u64, seconds: f64) -> Hms {
        Hms {
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn builtin_matches_parsed_templates() {
        for fractional in [true, false] {
            let parsed = HmsFormat::parse(crate::hms::default_format_spec(Some(fractional)))
                .expect("parse builtin");
            assert_eq!(parsed, HmsFormat::builtin(fractional));
        }
    }

    #[test]
    fn zero_padded_fixed_point_seconds() {
        let format = HmsFormat::parse("%02d:%02d:%09.6f").expect("parse");
        assert_eq!(format.render(&hms(1, 2, 3.5)), "01:02:03.500000");
        assert_eq!(format.render(&hms(120, 0, 59.25)), "120:00:59.250000");
    }

    #[test]
    fn integer_conversion_truncates_seconds() {
        let format = HmsFormat::parse("%02d:%02d:%02d").expect("parse");
        assert_eq!(format.render(&hms(0, 5, 7.9)), "00:05:07");
    }

    #[test]
    fn free_text_and_percent_literals() {
        let format = HmsFormat::parse("%dh %dm %ss (100%%)").expect("parse");
        assert_eq!(format.render(&hms(2, 3, 4.25)), "2h 3m 4.25s (100%)");
    }

    #[test]
    fn width_flags_align() {
        let format = HmsFormat::parse("[%-4d|%4d|%+.1f]").expect("parse");
        assert_eq!(format.render(&hms(7, 8, 9.0)), "[7   |   8|+9.0]");
    }

    #[test]
    fn fewer_conversions_than_values() {
        let format = HmsFormat::parse("%d hours").expect("parse");
        assert_eq!(format.render(&hms(3, 59, 59.0)), "3 hours");
    }

    #[test]
    fn rejects_bad_templates() {
        for template in ["%02d:%02d:%", "%q", "%d %d %d %d"] {
            match HmsFormat::parse(template) {
                Err(TimerError::InvalidTemplate { template: got, .. }) => {
                    assert_eq!(got, template)
                }
                other => panic!("expected invalid template for {template:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_round_trips_template_text() {
        let format: HmsFormat = "%d:%02d".parse().expect("parse");
        assert_eq!(format.to_string(), "%d:%02d");
        assert_eq!(format.template(), "%d:%02d");
    }
}
