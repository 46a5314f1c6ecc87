use argh::TopLevelCommand;

/// `argh` has no built-in `--version`; intercept it ahead of parsing, then
/// hand everything else to the normal parser.
pub fn from_env<T: TopLevelCommand>() -> T {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.first().map(String::as_str).unwrap_or(env!("CARGO_PKG_NAME"));
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    if wants_version(&rest) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }
    T::from_args(&[cmd], &rest).unwrap_or_else(|early_exit| match early_exit.status {
        Ok(()) => {
            println!("{}", early_exit.output);
            std::process::exit(0);
        }
        Err(()) => {
            eprintln!("{}", early_exit.output);
            std::process::exit(1);
        }
    })
}

fn wants_version(args: &[&str]) -> bool {
    args.iter().any(|arg| *arg == "--version" || *arg == "-V")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_flags_are_detected() {
        assert!(wants_version(&["--version"]));
        assert!(wants_version(&["-V"]));
        assert!(wants_version(&["3ds", "--version"]));
        assert!(!wants_version(&["3ds", "info", "cube.3ds"]));
        assert!(!wants_version(&[]));
    }
}
