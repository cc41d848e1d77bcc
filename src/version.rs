//! Version string assembly
//!
//! Dev builds carry the git commit and build date emitted by `build.rs`;
//! official builds (the `release` feature) show the bare crate version.

/// Short crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Full version line: `0.1.0 (abc1234 2026-08-07)` in dev builds.
pub fn long_version() -> String {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("CHATCAST_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            let short = &sha[..sha.len().min(7)];
            format!("{base} ({short} {date})")
        }
        _ => format!("{base} ({date})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_starts_with_the_crate_version() {
        assert!(long_version().starts_with(version()));
    }

    #[test]
    fn long_version_carries_the_build_date() {
        assert!(long_version().contains('('));
        assert!(long_version().ends_with(')'));
    }
}
