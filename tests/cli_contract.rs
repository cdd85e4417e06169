use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_randart(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_randart"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("randart command should run")
}

fn assert_is_png(path: &Path) {
    let bytes = std::fs::read(path).expect("output image should read back");
    assert_eq!(&bytes[1..4], b"PNG", "{} is not a PNG", path.display());
}

#[test]
fn bare_invocation_writes_two_default_images() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_randart(dir.path(), &[]);

    assert!(output.status.success(), "bare invocation should succeed");
    assert_is_png(&dir.path().join("art-1.png"));
    assert_is_png(&dir.path().join("art-2.png"));
}

#[test]
fn generate_with_seed_is_reproducible() {
    let dir_a = tempdir().expect("tempdir should create");
    let dir_b = tempdir().expect("tempdir should create");
    let args = ["generate", "--seed", "17", "--width", "32", "--height", "20"];

    assert!(run_randart(dir_a.path(), &args).status.success());
    assert!(run_randart(dir_b.path(), &args).status.success());

    let a = std::fs::read(dir_a.path().join("art-1.png")).expect("first image should read");
    let b = std::fs::read(dir_b.path().join("art-1.png")).expect("second image should read");
    assert_eq!(a, b, "same seed and size should produce identical files");
}

#[test]
fn generate_reports_seed_on_stdout() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_randart(
        dir.path(),
        &["generate", "--seed", "99", "--width", "8", "--height", "8"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("seed 99"),
        "stdout should name the seed, got: {stdout}"
    );
}

#[test]
fn noise_subcommand_writes_a_png() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_randart(
        dir.path(),
        &["noise", "--width", "16", "--height", "16", "-o", "smoke.png"],
    );

    assert!(output.status.success(), "noise subcommand should succeed");
    assert_is_png(&dir.path().join("smoke.png"));
}

#[test]
fn unwritable_output_directory_fails() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_randart(
        dir.path(),
        &[
            "generate",
            "--width",
            "8",
            "--height",
            "8",
            "-o",
            "missing-subdir",
        ],
    );

    assert!(
        !output.status.success(),
        "writing into a nonexistent directory should fail"
    );
}
