//! Utility commands (version).

use anyhow::Result;

/// Show version information
pub fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("intake {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_build_metadata_is_wired() {
        // The build script always emits both vars, falling back to "unknown".
        assert!(!env!("GIT_SHA").is_empty());
        assert!(!env!("BUILD_DATE").is_empty());
        assert!(!env!("CARGO_PKG_VERSION").is_empty());
    }
}
