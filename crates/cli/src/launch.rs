//! Construction of the launch command stored behind each alias.

/// Builds the shell command an alias expands to.
///
/// The application is started through the Electron launcher, backgrounded,
/// with all output discarded so the invoking terminal stays clean. The store
/// only ever sees the finished string.
pub fn build_launch_command(launcher: &str, target: &str) -> String {
    format!("{launcher} {target} > /dev/null 2>&1 &")
}

#[cfg(test)]
mod tests {
    use super::*;
    use electron_aliases_core::config::DEFAULT_LAUNCHER;

    #[test]
    fn test_build_launch_command_shape() {
        let command = build_launch_command(DEFAULT_LAUNCHER, "https://chat.example.com");
        assert_eq!(
            command,
            "/usr/lib/electron37/electron https://chat.example.com > /dev/null 2>&1 &"
        );
    }

    #[test]
    fn test_build_launch_command_backgrounds_and_silences() {
        let command = build_launch_command("/opt/electron", "/srv/app");
        assert!(command.ends_with("&"));
        assert!(command.contains("> /dev/null 2>&1"));
    }
}
