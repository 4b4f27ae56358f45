use crate::commands::NormalizeCmd;
use crate::CliError;
use morph::path::{parse_with_options, ParserOptions};

pub fn normalize(mut cmd: NormalizeCmd) -> Result<(), CliError> {
    let options = ParserOptions::DEFAULT.with_strict(cmd.strict);
    let path = parse_with_options(&cmd.input, &options)?;

    log::debug!("parsed {} commands", path.len());

    writeln!(&mut *cmd.output, "{}", path)?;

    Ok(())
}
