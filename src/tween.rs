//! Interpolating between two strings that contain numbers.
//!
//! The numbers embedded in the two strings are paired in order of appearance and
//! interpolated linearly, everything else is taken from the target string. For
//! example, tweening from `"M0,0L10,10"` to `"M10,10L20,20"` gives `"M5,5L15,15"`
//! at `t = 0.5`.
//!
//! Numbers with the same text in both strings are kept verbatim. Interpolated
//! values are formatted like JavaScript numbers, so the output of a tween is
//! stable across platforms.

use crate::path::format_number;

use regex::Regex;
use std::sync::OnceLock;

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[-+]?(?:[0-9]+\.?[0-9]*|\.?[0-9]+)(?:[eE][-+]?[0-9]+)?")
            .expect("number regex must compile")
    })
}

#[derive(Clone, Debug, PartialEq)]
enum Piece {
    Text(String),
    Number { from: f64, to: f64 },
}

/// A precomputed interpolation between two strings.
#[derive(Clone, Debug, PartialEq)]
pub struct StringTween {
    pieces: Vec<Piece>,
}

impl StringTween {
    pub fn new(from: &str, to: &str) -> Self {
        let mut pieces = Vec::new();

        let re = number_regex();
        let mut to_index = 0;
        for (a, b) in re.find_iter(from).zip(re.find_iter(to)) {
            push_text(&mut pieces, &to[to_index..b.start()]);

            if a.as_str() == b.as_str() {
                push_text(&mut pieces, b.as_str());
            } else {
                pieces.push(Piece::Number {
                    from: parse_number(a.as_str()),
                    to: parse_number(b.as_str()),
                });
            }

            to_index = b.end();
        }

        push_text(&mut pieces, &to[to_index..]);

        StringTween { pieces }
    }

    /// The string at `t`, `0.0` being the source and `1.0` the target.
    ///
    /// Values of `t` outside of `[0, 1]` extrapolate.
    pub fn sample(&self, t: f64) -> String {
        let mut buffer = ryu_js::Buffer::new();
        let mut output = String::new();
        for piece in &self.pieces {
            match *piece {
                Piece::Text(ref text) => output.push_str(text),
                Piece::Number { from, to } => {
                    output.push_str(format_number(lerp(from, to, t), &mut buffer));
                }
            }
        }

        output
    }

    /// Whether any part of the string changes with `t`.
    pub fn is_constant(&self) -> bool {
        !self.pieces.iter().any(|piece| matches!(piece, Piece::Number { .. }))
    }
}

/// Interpolates between two strings, see [`StringTween`].
pub fn interpolate_string(from: &str, to: &str) -> impl Fn(f64) -> String {
    let tween = StringTween::new(from, to);
    move |t| tween.sample(t)
}

fn push_text(pieces: &mut Vec<Piece>, text: &str) {
    if text.is_empty() {
        return;
    }

    if let Some(Piece::Text(prev)) = pieces.last_mut() {
        prev.push_str(text);
    } else {
        pieces.push(Piece::Text(text.to_string()));
    }
}

fn parse_number(src: &str) -> f64 {
    src.parse().unwrap_or(f64::NAN)
}

#[inline]
pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

#[test]
fn numbers_in_text() {
    let tween = StringTween::new("M0,0L10,10", "M10,10L20,20");

    assert_eq!(tween.sample(0.0), "M0,0L10,10");
    assert_eq!(tween.sample(0.5), "M5,5L15,15");
    assert_eq!(tween.sample(1.0), "M10,10L20,20");
    assert!(!tween.is_constant());
}

#[test]
fn text_comes_from_the_target() {
    let tween = StringTween::new("a1b2c", "x3y4z");
    assert_eq!(tween.sample(0.0), "x1y2z");
    assert_eq!(tween.sample(0.5), "x2y3z");
}

#[test]
fn unpaired_numbers() {
    // Extra numbers of the target are kept as text.
    let tween = StringTween::new("M0,0", "M10,10L20,20");
    assert_eq!(tween.sample(0.5), "M5,5L20,20");

    // Extra numbers of the source are dropped.
    let tween = StringTween::new("M0,0L20,20", "M10,10");
    assert_eq!(tween.sample(0.5), "M5,5");
}

#[test]
fn identical_numbers_are_kept_verbatim() {
    let tween = StringTween::new("1.50 2", "1.50 4");
    assert_eq!(tween.sample(0.5), "1.50 3");

    let tween = StringTween::new("M1,2", "M1,2Z");
    assert!(tween.is_constant());
    assert_eq!(tween.sample(0.3), "M1,2Z");
}

#[test]
fn number_syntax() {
    let tween = StringTween::new("-1 .5 1e2 +4", "1 1.5 2e2 -4");
    assert_eq!(tween.sample(0.5), "0 1 150 0");
}

#[test]
fn empty() {
    assert_eq!(StringTween::new("", "").sample(0.5), "");
    assert_eq!(StringTween::new("M1,1", "").sample(0.5), "");
    assert_eq!(StringTween::new("", "M1,1").sample(0.5), "M1,1");
}

#[test]
fn closure() {
    let f = interpolate_string("0", "10");
    assert_eq!(f(0.25), "2.5");
}
