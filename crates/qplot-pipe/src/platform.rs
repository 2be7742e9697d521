use crate::process::ProcessTransport;
use std::env;

/// Overrides the gnuplot executable used by [`gnuplot`].
pub const GNUPLOT_ENV: &str = "QPLOT_GNUPLOT";
/// Overrides the python executable used by [`python`].
pub const PYTHON_ENV: &str = "QPLOT_PYTHON";

#[cfg(target_os = "windows")]
const DEFAULT_GNUPLOT: &str = "gnuplot.exe";
#[cfg(not(target_os = "windows"))]
const DEFAULT_GNUPLOT: &str = "gnuplot";

#[cfg(target_os = "windows")]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(target_os = "windows"))]
const DEFAULT_PYTHON: &str = "python3";

/// A gnuplot process reading its script from stdin.
pub fn gnuplot() -> ProcessTransport {
    ProcessTransport::new(program_from_env(GNUPLOT_ENV, DEFAULT_GNUPLOT))
}

/// A python interpreter reading its program from stdin.
pub fn python() -> ProcessTransport {
    ProcessTransport::new(program_from_env(PYTHON_ENV, DEFAULT_PYTHON)).arg("-")
}

fn program_from_env(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_gnuplot_default_program() {
        env::remove_var(GNUPLOT_ENV);
        assert_eq!(gnuplot().program(), DEFAULT_GNUPLOT);
    }

    #[test]
    #[serial]
    fn test_gnuplot_env_override() {
        env::set_var(GNUPLOT_ENV, "/opt/gnuplot/bin/gnuplot");
        assert_eq!(gnuplot().program(), "/opt/gnuplot/bin/gnuplot");
        env::remove_var(GNUPLOT_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_override_is_ignored() {
        env::set_var(PYTHON_ENV, "  ");
        assert_eq!(python().program(), DEFAULT_PYTHON);
        env::remove_var(PYTHON_ENV);
    }
}
