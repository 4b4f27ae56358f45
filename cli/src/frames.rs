use crate::commands::FramesCmd;
use crate::CliError;
use morph::path::Command;
use morph::{interpolate_path_with, InterpolationOptions};

fn is_vertical(start: &Command, end: &Command) -> bool {
    start.x() == end.x()
}

pub fn frames(mut cmd: FramesCmd) -> Result<(), CliError> {
    let mut options = InterpolationOptions::DEFAULT;
    if cmd.exclude_vertical {
        options = options.with_exclude_segment(&is_vertical);
    }

    let interpolator = interpolate_path_with(cmd.from.as_deref(), cmd.to.as_deref(), &options)?;

    let count = cmd.count.max(1);
    log::debug!("writing {} frames", count + 1);

    for i in 0..=count {
        let t = i as f64 / count as f64;
        writeln!(&mut *cmd.output, "{}", interpolator.sample(t))?;
    }

    Ok(())
}
