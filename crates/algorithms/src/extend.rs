//! Inserting points into a path until it has as many commands as another one.
//!
//! The segments of the reference path are mapped proportionally onto the segments
//! of the path to extend: if the reference path has twice as many segments, each
//! segment of the extended path receives two commands. Lines and bézier curves are
//! split along their curve so the shape of the path does not change. Other commands
//! are duplicated.

use crate::path::{Command, CommandKind};
use crate::split::split_curve;

/// A callback that marks segments that should not receive inserted points.
///
/// It is called with the start and end commands of a segment of the path being
/// extended and returns `true` if the segment should be excluded. A typical use is
/// the vertical edges closing an area chart, which should stay straight while the
/// top and bottom lines are extended.
pub type ExcludeSegment = dyn Fn(&Command, &Command) -> bool;

/// Computes how many commands each segment of `commands` receives when extending
/// it to `reference_len` commands.
///
/// The item at index `i` is the number of commands emitted for the segment that
/// starts at `commands[i]`. Every index of `commands` has an entry, the last one
/// counting the copies of the last command (only non-zero for paths of length one
/// or when an excluded segment pushes its points to the end).
///
/// Excluded segments keep the single command they need but any additional command
/// is moved to the previous or next segment, whichever is closer to the insertion
/// point. Two adjacent excluded segments are not handled: a command moved out of
/// one of them can land in the other.
pub fn insertion_counts(
    commands: &[Command],
    reference_len: usize,
    exclude_segment: Option<&ExcludeSegment>,
) -> Vec<usize> {
    let mut counts = vec![0; commands.len()];
    if commands.is_empty() || reference_len < 2 {
        return counts;
    }

    let last = commands.len() - 1;
    let reference_segments = reference_len - 1;
    let segment_ratio = last as f64 / reference_segments as f64;

    for i in 0..reference_segments {
        let position = segment_ratio * i as f64;
        let mut insert_index = (position.floor() as usize).min(last);

        if let Some(exclude) = exclude_segment {
            if insert_index < last
                && counts[insert_index] > 0
                && exclude(&commands[insert_index], &commands[insert_index + 1])
            {
                let add_to_prior_segment = position.fract() < 0.5;
                if add_to_prior_segment {
                    if insert_index > 0 {
                        insert_index -= 1;
                    } else if insert_index < last {
                        insert_index += 1;
                    }
                } else if insert_index < last {
                    insert_index += 1;
                } else if insert_index > 0 {
                    insert_index -= 1;
                }
            }
        }

        counts[insert_index] += 1;
    }

    counts
}

/// Extends `commands` to the length of `reference` by inserting commands into its
/// segments.
///
/// Every command of `commands` is kept, in order, and the first one stays first.
/// `commands` is returned unchanged if it is empty or not shorter than `reference`.
///
/// See [`insertion_counts`] for how the inserted commands are distributed.
pub fn extend(
    commands: &[Command],
    reference: &[Command],
    exclude_segment: Option<&ExcludeSegment>,
) -> Vec<Command> {
    if commands.is_empty() || reference.len() <= commands.len() {
        return commands.to_vec();
    }

    let counts = insertion_counts(commands, reference.len(), exclude_segment);
    log::trace!(
        "extending {} commands to {}: {:?}",
        commands.len(),
        reference.len(),
        counts
    );

    let last = commands.len() - 1;
    let mut extended = Vec::with_capacity(reference.len());
    extended.push(commands[0]);

    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        if i == last {
            let copy = commands[last].move_to_as_line_to();
            extended.extend(std::iter::repeat(copy).take(count));
            continue;
        }

        split_segment(&commands[i], &commands[i + 1], count, &mut extended);
    }

    extended
}

/// Emits `count` commands for the segment from `start` to `end`, the last one
/// being `end`.
///
/// Absolute lines and bézier curves are split along the curve, other commands
/// are approximated by repeating `start`.
fn split_segment(start: &Command, end: &Command, count: usize, output: &mut Vec<Command>) {
    let splittable = !end.relative
        && matches!(
            end.kind(),
            CommandKind::LineTo | CommandKind::QuadraticTo | CommandKind::CubicTo
        );

    if splittable {
        output.extend(split_curve(start, end, count));
        return;
    }

    let copy = start.move_to_as_line_to();
    output.extend(std::iter::repeat(copy).take(count - 1));
    output.push(*end);
}

#[cfg(test)]
use crate::path::parse;

#[cfg(test)]
fn commands(src: &str) -> Vec<Command> {
    parse(src).unwrap().commands
}

#[cfg(test)]
fn vertical(start: &Command, end: &Command) -> bool {
    start.x() == end.x()
}

#[test]
fn counts_are_proportional() {
    let cmds = commands("M0,0L10,10L20,20");

    assert_eq!(insertion_counts(&cmds, 5, None), vec![2, 2, 0]);
    assert_eq!(insertion_counts(&cmds, 3, None), vec![1, 1, 0]);
    assert_eq!(insertion_counts(&cmds, 4, None), vec![2, 1, 0]);
    assert_eq!(insertion_counts(&cmds[..1], 3, None), vec![2]);
    assert_eq!(insertion_counts(&[], 3, None), Vec::<usize>::new());
}

#[test]
fn single_command() {
    let extended = extend(&commands("M0,0"), &commands("M10,10L20,20L30,30"), None);

    assert_eq!(
        extended,
        vec![
            Command::move_to(0.0, 0.0),
            Command::line_to(0.0, 0.0),
            Command::line_to(0.0, 0.0),
        ]
    );
}

#[test]
fn lines() {
    let extended = extend(
        &commands("M0,0L0,10L10,10"),
        &commands("M0,0L1,1L2,2L3,3L4,4"),
        None,
    );

    assert_eq!(extended, commands("M0,0L0,5L0,10L5,10L10,10"));
}

#[test]
fn curves() {
    let extended = extend(
        &commands("M0,0C1,1,2,2,4,4C3,3,4,4,6,6"),
        &commands("M0,0L1,1L2,2L3,3L4,4"),
        None,
    );

    assert_eq!(
        extended,
        commands("M0,0C0.5,0.5,1,1,1.625,1.625C2.25,2.25,3,3,4,4C3.5,3.5,3.5,3.5,3.875,3.875C4.25,4.25,5,5,6,6"),
    );
}

#[test]
fn duplicated_commands() {
    let reference = commands("M0,0L1,1L2,2");

    // Horizontal lines and relative commands are not split.
    assert_eq!(
        extend(&commands("M0,0H5"), &reference, None),
        commands("M0,0L0,0H5"),
    );
    assert_eq!(
        extend(&commands("M0,0l5,5"), &reference, None),
        commands("M0,0L0,0l5,5"),
    );
    // Only absolute move-to commands are turned into line-to commands.
    assert_eq!(
        extend(&commands("m0,0a1,1,0,0,1,5,5"), &reference, None),
        commands("m0,0m0,0a1,1,0,0,1,5,5"),
    );
}

#[test]
fn keeps_original_commands() {
    let shorter = commands("M3,7Q10,0,10,10T20,20L15,3C1,2,3,4,5,6");
    let reference = commands("M0,0L1,1L2,2L3,3L4,4L5,5L6,6L7,7L8,8L9,9L10,10");
    let extended = extend(&shorter, &reference, None);

    assert_eq!(extended.len(), reference.len());
    assert_eq!(extended[0], shorter[0]);

    // Curves are split, but the endpoints of the original commands are all there.
    let endpoint = |cmd: &Command| (cmd.x(), cmd.y());
    let mut remaining = shorter.iter().map(endpoint).peekable();
    for cmd in &extended {
        if remaining.peek() == Some(&endpoint(cmd)) {
            remaining.next();
        }
    }
    assert!(remaining.next().is_none());
}

#[test]
fn not_shorter() {
    let cmds = commands("M0,0L1,1L2,2");

    assert_eq!(extend(&cmds, &cmds, None), cmds);
    assert_eq!(extend(&cmds, &cmds[..2], None), cmds);
    assert_eq!(extend(&[], &cmds, None), vec![]);
}

#[test]
fn excluded_segments() {
    let shorter = commands("M0,0L0,10L10,10");
    let reference = commands("M0,0L1,1L2,2L3,3L4,4");

    assert_eq!(
        insertion_counts(&shorter, reference.len(), Some(&vertical)),
        vec![1, 3, 0],
    );

    let extended = extend(&shorter, &reference, Some(&vertical));
    assert_eq!(extended.len(), 5);
    assert_eq!(&extended[..2], &shorter[..2]);
    assert_eq!(extended[4], Command::line_to(10.0, 10.0));
    for cmd in &extended[2..] {
        assert!((cmd.y().unwrap() - 10.0).abs() < 1e-9);
    }
}

#[test]
fn excluded_segment_moves_to_the_end() {
    let shorter = commands("M0,0L0,10");
    let reference = commands("M0,0L1,1L2,2");
    let exclude_all = |_: &Command, _: &Command| true;

    assert_eq!(
        insertion_counts(&shorter, reference.len(), Some(&exclude_all)),
        vec![1, 1],
    );
    assert_eq!(
        extend(&shorter, &reference, Some(&exclude_all)),
        commands("M0,0L0,10L0,10"),
    );
}

#[test]
fn adjacent_excluded_segments() {
    // Both vertical segments are excluded, but the commands moved out of one of
    // them land in the other.
    let shorter = commands("M0,0L0,10L0,20L10,20");

    assert_eq!(
        insertion_counts(&shorter, 8, Some(&vertical)),
        vec![2, 2, 3, 0],
    );

    let reference = commands("M0,0L1,1L2,2L3,3L4,4L5,5L6,6L7,7");
    let extended = extend(&shorter, &reference, Some(&vertical));
    assert_eq!(extended.len(), 8);
    assert_eq!(&extended[..5], &commands("M0,0L0,5L0,10L0,15L0,20")[..]);
    assert_eq!(extended[7], Command::line_to(10.0, 20.0));
}
