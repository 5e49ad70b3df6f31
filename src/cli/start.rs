use crate::cli::{
    actions::Action,
    commands::{self, logging},
    dispatch, telemetry,
};
use anyhow::Result;
use clap::ArgMatches;
use tracing::Level;

/// Log level requested on the command line; `None` leaves the default filter.
fn requested_level(matches: &ArgMatches) -> Option<Level> {
    let count = matches
        .get_one::<u8>(logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    match count {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Parse the process arguments, install logging and resolve the action to run.
///
/// # Errors
///
/// Returns an error if logging cannot be installed or the arguments do not
/// describe a valid action.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    telemetry::init(
        requested_level(&matches),
        logging::LogFormat::from_matches(&matches),
    )?;

    dispatch::handler(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_for(args: &[&str]) -> Result<Option<Level>> {
        let mut argv = vec!["storefront"];
        argv.extend_from_slice(args);
        argv.push("whoami");
        Ok(requested_level(&commands::new().try_get_matches_from(argv)?))
    }

    #[test]
    fn test_requested_level() -> Result<()> {
        temp_env::with_var_unset("STOREFRONT_LOG_LEVEL", || {
            assert_eq!(level_for(&[])?, None);
            assert_eq!(level_for(&["-v"])?, Some(Level::WARN));
            assert_eq!(level_for(&["-vv"])?, Some(Level::INFO));
            assert_eq!(level_for(&["-vvv"])?, Some(Level::DEBUG));
            assert_eq!(level_for(&["-vvvvv"])?, Some(Level::TRACE));
            Ok(())
        })
    }
}
