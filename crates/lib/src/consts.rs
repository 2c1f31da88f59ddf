/// Name used for the binary, log prefixes and environment variables.
pub const APP_NAME: &str = "makeover";

/// Buildfile read when no path is given.
pub const DEFAULT_BUILDFILE: &str = "buildfile";

/// Group assigned to targets defined before any `[group: ...]` header.
pub const DEFAULT_GROUP: &str = "General";

/// Overrides the buildfile path.
pub const ENV_BUILDFILE: &str = "MAKEOVER_FILE";

/// Overrides the shell used to run target commands.
pub const ENV_SHELL: &str = "MAKEOVER_SHELL";
