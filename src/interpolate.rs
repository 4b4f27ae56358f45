//! Interpolating between two paths.
//!
//! The two paths are first brought to the same number of commands by inserting
//! points into the shorter one (see [`extend`](crate::algorithms::extend)), then each
//! command of the source path is converted to the type of the matching command of
//! the target path (see [`reconcile`](crate::algorithms::reconcile)). At this point
//! the two paths have the same structure and can be interpolated value by value.
//!
//! # Examples
//!
//! ```
//! use morph::interpolate_path;
//!
//! let interpolator = interpolate_path(Some("M0,0L10,10"), Some("M10,10L20,20L200,200")).unwrap();
//!
//! assert_eq!(interpolator.sample(0.0), "M0,0L5,5L10,10");
//! assert_eq!(interpolator.sample(0.5), "M5,5L12.5,12.5L105,105");
//! assert_eq!(interpolator.sample(1.0), "M10,10L20,20L200,200");
//! ```
//!
//! # Missing paths
//!
//! A missing path (`None`) or a path without any command behaves as if it was
//! reduced to the first point of the other path, so the other path appears to grow
//! out of, or shrink into, that point.
//!
//! # Closed paths
//!
//! The closing `Z` is only kept in the intermediate paths if both paths are closed.
//! A missing path counts as closed.

use crate::algorithms::extend::{extend, ExcludeSegment};
use crate::algorithms::reconcile::{convert_params, reconcile};
use crate::path::{
    commands_to_string, parse_with_options, Command, ParseError, ParserOptions, Params, PathData,
};
use crate::tween::{lerp, StringTween};

/// Parameters for the path interpolators.
#[derive(Copy, Clone)]
#[non_exhaustive]
pub struct InterpolationOptions<'l> {
    /// How the path strings are parsed.
    ///
    /// Only used by [`interpolate_path_with`].
    ///
    /// Default value: `ParserOptions::DEFAULT`.
    pub parser: ParserOptions,

    /// Segments of the shorter path for which this callback returns `true` do not
    /// receive inserted points. See [`ExcludeSegment`].
    ///
    /// Default value: `None`.
    pub exclude_segment: Option<&'l ExcludeSegment>,
}

impl<'l> InterpolationOptions<'l> {
    pub const DEFAULT: Self = InterpolationOptions {
        parser: ParserOptions::DEFAULT,
        exclude_segment: None,
    };

    #[inline]
    pub fn with_parser_options(mut self, parser: ParserOptions) -> Self {
        self.parser = parser;
        self
    }

    #[inline]
    pub fn with_exclude_segment(mut self, exclude_segment: &'l ExcludeSegment) -> Self {
        self.exclude_segment = Some(exclude_segment);
        self
    }
}

impl<'l> Default for InterpolationOptions<'l> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'l> std::fmt::Debug for InterpolationOptions<'l> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("InterpolationOptions")
            .field("parser", &self.parser)
            .field("exclude_segment", &self.exclude_segment.is_some())
            .finish()
    }
}

/// Interpolates between two path strings.
///
/// Returns an error if either string cannot be parsed.
pub fn interpolate_path(a: Option<&str>, b: Option<&str>) -> Result<PathInterpolator, ParseError> {
    interpolate_path_with(a, b, &InterpolationOptions::DEFAULT)
}

/// Interpolates between two path strings with custom options.
pub fn interpolate_path_with(
    a: Option<&str>,
    b: Option<&str>,
    options: &InterpolationOptions,
) -> Result<PathInterpolator, ParseError> {
    let a_path = parse_optional(a, &options.parser)?;
    let b_path = parse_optional(b, &options.parser)?;

    let end = b.unwrap_or("").to_string();

    let (a_commands, b_commands) = match equalize(
        a_path.as_ref(),
        b_path.as_ref(),
        options.exclude_segment,
    ) {
        Some(commands) => commands,
        None => {
            return Ok(PathInterpolator { tween: None, end });
        }
    };

    let mut from = commands_to_string(&a_commands);
    let mut to = commands_to_string(&b_commands);
    if both_closed(a_path.as_ref(), b_path.as_ref()) {
        from.push('Z');
        to.push('Z');
    }

    log::trace!("interpolating from {:?} to {:?}", from, to);

    Ok(PathInterpolator {
        tween: Some(StringTween::new(&from, &to)),
        end,
    })
}

/// Interpolates between two parsed paths.
///
/// This follows the same steps as [`interpolate_path`] but produces [`PathData`]
/// values and interpolates each parameter directly instead of going through text.
/// The [`parser`](InterpolationOptions::parser) option is ignored.
pub fn interpolate_path_data(
    a: Option<&PathData>,
    b: Option<&PathData>,
    options: &InterpolationOptions,
) -> PathDataInterpolator {
    let end = b.cloned().unwrap_or_default();

    let (from, to) = equalize(a, b, options.exclude_segment).unwrap_or_default();
    let closed = !from.is_empty() && both_closed(a, b);

    PathDataInterpolator {
        from,
        to,
        closed,
        end,
    }
}

/// Samples the interpolation between two path strings.
///
/// Created with [`interpolate_path`] or [`interpolate_path_with`].
#[derive(Clone, Debug)]
pub struct PathInterpolator {
    // `None` if both paths are empty.
    tween: Option<StringTween>,
    end: String,
}

impl PathInterpolator {
    /// The path at `t`.
    ///
    /// `sample(1.0)` returns the target path exactly as it was given, or an
    /// empty string if it was missing.
    pub fn sample(&self, t: f64) -> String {
        match self.tween {
            None => String::new(),
            Some(_) if t == 1.0 => self.end.clone(),
            Some(ref tween) => tween.sample(t),
        }
    }

    pub fn into_fn(self) -> impl Fn(f64) -> String + Send + Sync {
        move |t| self.sample(t)
    }
}

/// Samples the interpolation between two parsed paths.
///
/// Created with [`interpolate_path_data`].
#[derive(Clone, Debug)]
pub struct PathDataInterpolator {
    from: Vec<Command>,
    to: Vec<Command>,
    closed: bool,
    end: PathData,
}

impl PathDataInterpolator {
    /// The path at `t`.
    ///
    /// Each command has the type of the target path's command and parameters
    /// interpolated linearly. `sample(1.0)` returns the target path unchanged, or
    /// an empty path if it was missing.
    pub fn sample(&self, t: f64) -> PathData {
        if t == 1.0 {
            return self.end.clone();
        }

        let commands = self
            .from
            .iter()
            .zip(self.to.iter())
            .map(|(from, to)| interpolate_command(from, to, t))
            .collect();

        PathData::from_commands(commands, self.closed)
    }

    pub fn into_fn(self) -> impl Fn(f64) -> PathData + Send + Sync {
        move |t| self.sample(t)
    }
}

fn interpolate_command(from: &Command, to: &Command, t: f64) -> Command {
    // Commands are already reconciled, except for move-to targets.
    let from_params = if from.kind() == to.kind() {
        from.params
    } else {
        convert_params(&from.params, &to.params)
    };

    let to_values = to.values();
    let values: Vec<f64> = from_params
        .values()
        .iter()
        .zip(to_values.iter())
        .map(|(&a, &b)| if a == b { b } else { lerp(a, b, t) })
        .collect();

    Command {
        relative: to.relative,
        params: Params::from_values(to.kind(), &values),
    }
}

fn parse_optional(
    src: Option<&str>,
    options: &ParserOptions,
) -> Result<Option<PathData>, ParseError> {
    src.map(|src| parse_with_options(src, options)).transpose()
}

fn both_closed(a: Option<&PathData>, b: Option<&PathData>) -> bool {
    a.map_or(true, |path| path.closed) && b.map_or(true, |path| path.closed)
}

/// Brings both paths to the same number of commands and the commands of `a` to the
/// types of the commands of `b`.
///
/// Returns `None` if both paths are empty.
fn equalize(
    a: Option<&PathData>,
    b: Option<&PathData>,
    exclude_segment: Option<&ExcludeSegment>,
) -> Option<(Vec<Command>, Vec<Command>)> {
    let mut a_commands = a.map(|path| path.commands.clone()).unwrap_or_default();
    let mut b_commands = b.map(|path| path.commands.clone()).unwrap_or_default();

    match (a_commands.first(), b_commands.first()) {
        (None, None) => {
            return None;
        }
        (None, Some(&first)) => a_commands.push(first),
        (Some(&first), None) => b_commands.push(first),
        (Some(_), Some(_)) => {}
    }

    log::debug!(
        "equalizing paths of {} and {} commands",
        a_commands.len(),
        b_commands.len()
    );

    if b_commands.len() > a_commands.len() {
        a_commands = extend(&a_commands, &b_commands, exclude_segment);
    } else if a_commands.len() > b_commands.len() {
        b_commands = extend(&b_commands, &a_commands, exclude_segment);
    }

    let a_commands = reconcile(&a_commands, &b_commands);

    log::debug!("equalized to {} commands", a_commands.len());

    Some((a_commands, b_commands))
}

#[test]
fn options() {
    let exclude = |_: &Command, _: &Command| false;
    let options = InterpolationOptions::DEFAULT
        .with_parser_options(ParserOptions::STRICT)
        .with_exclude_segment(&exclude);

    assert!(options.parser.strict);
    assert!(options.exclude_segment.is_some());
    assert!(InterpolationOptions::default().exclude_segment.is_none());
}

#[test]
fn strict_parsing() {
    let options = InterpolationOptions::DEFAULT.with_parser_options(ParserOptions::STRICT);

    assert!(interpolate_path_with(Some("M0,0L1"), Some("M0,0"), &options).is_err());
    assert!(interpolate_path(Some("M0,0L1"), Some("M0,0")).is_ok());
}

#[test]
fn invalid_path() {
    assert_eq!(
        interpolate_path(Some("M0,0"), Some("M0,0K1,1")).err(),
        Some(ParseError::InvalidCommand {
            command: 'K',
            column: 4
        })
    );
}

#[test]
fn interpolators_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let interpolator = interpolate_path(Some("M0,0"), Some("M1,1L2,2")).unwrap();
    assert_send_sync(&interpolator);

    let a: PathData = "M0,0".parse().unwrap();
    assert_send_sync(&interpolate_path_data(Some(&a), None, &InterpolationOptions::DEFAULT));
}
