// crates/spiadc-cli/tests/acquire_replay.rs

use std::path::Path;
use std::process::{Command, Output};

const FRAME: [u8; 6] = [0x10, 0x20, 0x30, 0xFF, 0xFF, 0xFF];

/// Custom profile whose scale is exactly 1.0, so mapped == sign-extended.
const IDENTITY: [&str; 10] = [
    "--profile",
    "custom",
    "--in-min",
    "-8388608",
    "--in-max",
    "8388607",
    "--out-min",
    "-8388608",
    "--out-max",
    "8388607",
];

fn cli() -> Command {
    let mut c = Command::new(env!("CARGO_BIN_EXE_spiadc-cli"));
    c.env("RUST_LOG", "warn");
    c
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn write_frames(path: &Path, frames: usize) {
    let bytes: Vec<u8> = FRAME.iter().copied().cycle().take(FRAME.len() * frames).collect();
    std::fs::write(path, bytes).expect("write frames");
}

#[test]
fn acquire_from_file_prints_one_line_per_frame() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    write_frames(&dev, 3);

    let out = run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "-n", "3"])
            .args(IDENTITY),
    );
    assert_eq!(stdout_lines(&out), vec!["[1056816 -1]"; 3]);
}

#[test]
fn acquire_raw_and_jsonl_output() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    write_frames(&dev, 1);

    let out = run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6"])
            .args(["--format", "jsonl", "--raw"])
            .args(IDENTITY),
    );
    assert_eq!(
        stdout_lines(&out),
        vec![
            "raw 0: 10 20 30 ff ff ff".to_string(),
            "i24 0: [1056816 -1]".to_string(),
            "{\"i\":0,\"ch\":[1056816,-1]}".to_string(),
        ]
    );
}

#[test]
fn acquire_little_endian_fields() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    std::fs::write(&dev, [0x30, 0x20, 0x10, 0x00, 0x00, 0x80]).unwrap();

    let out = run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "--endian", "le"])
            .args(IDENTITY),
    );
    assert_eq!(stdout_lines(&out), vec!["[1056816 -8388608]"]);
}

#[test]
fn record_inspect_replay_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    let spc = dir.path().join("run.spc");
    write_frames(&dev, 4);

    let live = run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "-n", "4"])
            .args(["--record", spc.to_str().unwrap()]),
    );

    let inspect = run_ok(cli().args(["inspect", "--in", spc.to_str().unwrap()]));
    let report = String::from_utf8_lossy(&inspect.stderr);
    assert!(report.contains("frame_count   = 4"), "{report}");
    assert!(report.contains("channels      = 2"), "{report}");

    let replay = run_ok(cli().args(["replay", "--in", spc.to_str().unwrap()]));
    assert_eq!(stdout_lines(&replay), stdout_lines(&live));
    assert_eq!(stdout_lines(&replay).len(), 4);
}

#[test]
fn gated_acquire_reads_every_frame() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    write_frames(&dev, 3);

    let out = run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "-n", "3"])
            .args(["--drdy-period-us", "500", "--timeout-ms", "3"])
            .args(IDENTITY),
    );
    assert_eq!(stdout_lines(&out).len(), 3);
    let summary = String::from_utf8_lossy(&out.stderr);
    assert!(summary.contains("frames=3"), "{summary}");
}

#[test]
fn short_read_fails_after_full_frames() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    std::fs::write(&dev, [0u8; 6 + 4]).unwrap();

    let out = cli()
        .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "-n", "2"])
        .args(IDENTITY)
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert_eq!(stdout_lines(&out), vec!["[0 0]"]);
    assert!(String::from_utf8_lossy(&out.stderr).contains("short read"));
}

#[test]
fn rejects_frame_length_not_multiple_of_three() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    write_frames(&dev, 1);

    let out = cli()
        .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "4"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a multiple"));
}

#[test]
fn replay_rejects_corrupt_capture() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    let spc = dir.path().join("run.spc");
    write_frames(&dev, 2);

    run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "-n", "2"])
            .args(["--record", spc.to_str().unwrap()]),
    );

    let mut bytes = std::fs::read(&spc).unwrap();
    bytes[20] ^= 0x01;
    std::fs::write(&spc, bytes).unwrap();

    let out = cli()
        .args(["replay", "--in", spc.to_str().unwrap()])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("crc32 mismatch"));
}

#[test]
fn replay_count_beyond_capture_is_rejected_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let dev = dir.path().join("frames.bin");
    let spc = dir.path().join("run.spc");
    write_frames(&dev, 2);

    run_ok(
        cli()
            .args(["acquire", "-d", dev.to_str().unwrap(), "-l", "6", "-n", "2"])
            .args(["--record", spc.to_str().unwrap()]),
    );

    let out = cli()
        .args(["replay", "--in", spc.to_str().unwrap(), "-n", "3"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "nothing decoded");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("capture holds 2 frames"), "{err}");
    assert!(!err.contains("short read"), "{err}");

    let partial = run_ok(cli().args(["replay", "--in", spc.to_str().unwrap(), "-n", "1"]));
    assert_eq!(stdout_lines(&partial).len(), 1);
}
