use kurbo::{ParamCurve, QuadBez};

use crate::{
    foundation::core::Point,
    path::command::PathCommand,
    path::lexer::{Token, lex},
    path::polyline::Polyline,
};

/// Smallest accepted quadratic sample count.
pub const MIN_SAMPLE_COUNT: u32 = 2;
/// Largest accepted quadratic sample count.
pub const MAX_SAMPLE_COUNT: u32 = 30;
/// Sample count used when none is configured.
pub const DEFAULT_SAMPLE_COUNT: u32 = 15;

/// Decode a path string into commands.
///
/// Parsing is lenient: unknown letters and stray numbers are skipped, and a command whose
/// arguments are cut short (by another letter or the end of input) is dropped while parsing
/// resumes at the interrupting token.
pub fn parse_commands(src: &str) -> Vec<PathCommand> {
    let tokens = lex(src);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while pos < tokens.len() {
        let Token::Command(letter) = tokens[pos] else {
            pos += 1;
            continue;
        };
        pos += 1;

        let arity = match letter {
            'M' | 'L' => 2,
            'Q' => 4,
            'Z' | 'z' => 0,
            _ => continue,
        };

        let Some(args) = take_numbers(&tokens, pos, arity) else {
            tracing::trace!(%letter, "dropping command with missing arguments");
            pos = skip_numbers(&tokens, pos);
            continue;
        };
        pos += arity;

        let cmd = match letter {
            'M' => PathCommand::MoveTo(Point::new(args[0], args[1])),
            'L' => PathCommand::LineTo(Point::new(args[0], args[1])),
            'Q' => PathCommand::QuadraticCurveTo {
                control: Point::new(args[0], args[1]),
                end: Point::new(args[2], args[3]),
            },
            _ => PathCommand::Close,
        };
        out.push(cmd);
    }

    out
}

fn take_numbers(tokens: &[Token], pos: usize, n: usize) -> Option<[f64; 4]> {
    let mut args = [0.0; 4];
    for (k, slot) in args.iter_mut().take(n).enumerate() {
        match tokens.get(pos + k) {
            Some(Token::Number(v)) => *slot = *v,
            _ => return None,
        }
    }
    Some(args)
}

fn skip_numbers(tokens: &[Token], mut pos: usize) -> usize {
    while matches!(tokens.get(pos), Some(Token::Number(_))) {
        pos += 1;
    }
    pos
}

/// Point on the quadratic Bézier `(1-t)²·p0 + 2(1-t)t·control + t²·end`.
pub fn quad_point(t: f64, p0: Point, control: Point, end: Point) -> Point {
    QuadBez::new(p0, control, end).eval(t)
}

/// Flattens path strings into polylines, sampling quadratic curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathParser {
    sample_count: u32,
}

impl Default for PathParser {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl PathParser {
    /// Build a parser; `sample_count` is clamped to `[MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT]`.
    pub fn new(sample_count: u32) -> Self {
        Self {
            sample_count: sample_count.clamp(MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT),
        }
    }

    /// Segments emitted per quadratic curve.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Parse and flatten a path string. Malformed input yields a partial or empty polyline.
    pub fn parse(&self, src: &str) -> Polyline {
        self.flatten(&parse_commands(src))
    }

    /// Flatten decoded commands into a polyline.
    pub fn flatten(&self, commands: &[PathCommand]) -> Polyline {
        let mut out = Polyline::default();
        let mut current = Point::ZERO;

        for cmd in commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    current = p;
                    out.push(p);
                }
                PathCommand::QuadraticCurveTo { control, end } => {
                    let n = self.sample_count;
                    for i in 1..=n {
                        let t = f64::from(i) / f64::from(n);
                        out.push(quad_point(t, current, control, end));
                    }
                    current = end;
                }
                PathCommand::Close => {
                    if let Some(&first) = out.points().first() {
                        out.push(first);
                    }
                }
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/parser.rs"]
mod tests;
