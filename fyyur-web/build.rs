//! Build identification for the fyyur binary
//!
//! `GIT_HASH` is reported as `git_hash` by `/health`. All three values go
//! into the "Starting Fyyur" line logged by `main` at startup, so a running
//! server can be matched to the commit and profile it was built from.

use std::process::Command;

fn main() {
    let identification = [
        ("GIT_HASH", git_short_hash().unwrap_or_else(|| "unknown".to_string())),
        (
            "BUILD_TIMESTAMP",
            chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false),
        ),
        (
            "BUILD_PROFILE",
            std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()),
        ),
    ];

    for (key, value) in identification {
        println!("cargo:rustc-env={}={}", key, value);
    }
    // Runs on every build so the hash follows the checked-out commit
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|hash| hash.trim().to_string())
}
