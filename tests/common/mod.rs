// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Creates an empty scratch directory acting as the suites folder.
pub fn suites_dir() -> TempDir {
    tempdir().expect("Failed to create temporary suites directory")
}

/// Writes a fake suite executable that echoes its arguments and exits with
/// `exit_code`.
#[cfg(unix)]
pub fn write_suite(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    let script = format!("#!/bin/sh\necho \"output from {name} $@\"\nexit {exit_code}\n");
    write_script(dir, name, &script)
}

/// Writes a fake suite that succeeds only when invoked with exactly the
/// given argument vector.
#[cfg(unix)]
pub fn write_arg_checking_suite(dir: &Path, name: &str, expected: &[&str]) -> PathBuf {
    let mut script = String::from("#!/bin/sh\n");
    script.push_str(&format!("test $# -eq {} || exit 10\n", expected.len()));
    for (i, arg) in expected.iter().enumerate() {
        script.push_str(&format!("test \"${}\" = \"{}\" || exit 11\n", i + 1, arg));
    }
    script.push_str("exit 0\n");
    write_script(dir, name, &script)
}

/// Writes a fake suite whose output wraps a run of raw non-UTF-8 bytes in
/// ordinary text lines.
#[cfg(unix)]
pub fn write_binary_output_suite(dir: &Path, name: &str) -> PathBuf {
    let script = "#!/bin/sh\n\
        echo \"BEFORE_RAW_BYTES\"\n\
        printf '\\377\\376\\375 raw\\n'\n\
        echo \"AFTER_RAW_BYTES\"\n\
        exit 0\n";
    write_script(dir, name, script)
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, contents: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write suite script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark suite script executable");
    path
}

/// Writes a file that matches the suite naming convention but carries no
/// execute permission, to exercise spawn failures.
#[cfg(unix)]
pub fn write_unlaunchable_suite(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, "not a program").expect("Failed to write file");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644))
        .expect("Failed to set permissions");
    path
}

/// Converts a slice of literals into the owned strings the library APIs take.
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Sorted copy, for comparing collections whose order is not specified.
pub fn sorted(values: &[String]) -> Vec<String> {
    let mut sorted = values.to_vec();
    sorted.sort();
    sorted
}
