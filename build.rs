//! Stamps the commit and build date used by `forge-import --version`

use std::process::Command;

/// Short hash of the checked-out commit, when built from a git work tree
fn commit_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_owned()).filter(|hash| !hash.is_empty())
}

fn main() {
    let stamps = [
        ("GIT_HASH", commit_hash().unwrap_or_else(|| "unknown".into())),
        ("BUILD_DATE", chrono::Utc::now().format("%Y-%m-%d").to_string()),
    ];
    for (key, value) in stamps {
        println!("cargo:rustc-env={key}={value}");
    }

    for watched in ["build.rs", ".git/HEAD", ".git/refs/heads"] {
        println!("cargo:rerun-if-changed={watched}");
    }
}
