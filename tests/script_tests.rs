//! Script runner tests over the fixtures in tests/scripts

use ibp::error::ErrorKind;
use ibp::interpreter::Interpreter;
use ibp::shell::{run_script, ShellOptions};
use rstest::rstest;
use std::path::{Path, PathBuf};

fn run(path: &Path) -> (i32, String) {
    let mut interp = Interpreter::new();
    let mut out = Vec::new();
    let code = run_script(&mut interp, path, &ShellOptions::default(), &mut out).expect("Failed to write output");
    (code, String::from_utf8(out).expect("Output is not UTF-8"))
}

#[rstest]
fn test_passing_scripts(#[files("tests/scripts/ok_*.ibp")] path: PathBuf) {
    let (code, output) = run(&path);
    assert_eq!(code, 0, "{}:\n{}", path.display(), output);
    assert!(!output.contains("error["), "{output}");
}

#[rstest]
#[case("tests/scripts/fail_missing.ibp", ErrorKind::FileOpenError)]
#[case("tests/scripts/fail_not_loaded.ibp", ErrorKind::NotLoaded)]
#[case("tests/scripts/fail_unloaded_bad_tag.ibp", ErrorKind::NotLoaded)]
#[case("tests/scripts/fail_bounds.ibp", ErrorKind::OutOfBounds)]
#[case("tests/scripts/fail_bad_tag.ibp", ErrorKind::InvalidArgument)]
#[case("tests/scripts/fail_unknown.ibp", ErrorKind::UnknownCommand)]
fn test_failing_scripts(#[case] path: &str, #[case] kind: ErrorKind) {
    let (code, output) = run(Path::new(path));
    assert_eq!(code, kind.code(), "{output}");
    assert!(output.contains(&format!("error[{kind}]")), "{output}");
}

#[test]
fn test_walk_output() {
    let (code, output) = run(Path::new("tests/scripts/ok_walk.ibp"));
    assert_eq!(code, 0);

    let expected = [
        "ibp> ld tests/data/sample.bin",
        "Opened tests/data/sample.bin (36 bytes)",
        "ibp> rv i32 f32",
        "0x00000000  2a000000          i32:42",
        "ibp> pos",
        "tests/data/sample.bin: cursor at 36 of 36 bytes",
        "ibp> mv -36",
        "Cursor at 0",
    ];
    for line in expected {
        assert!(output.lines().any(|l| l == line), "missing {line:?} in\n{output}");
    }
    for value in ["f32:3.5", "f64:3.5", "u32:4294967295", "i64:-2", "u64:9223372036854775808"] {
        assert!(output.contains(value), "missing {value} in\n{output}");
    }
}

#[test]
fn test_stops_after_failure() {
    let (code, output) = run(Path::new("tests/scripts/fail_bounds.ibp"));
    assert_eq!(code, ErrorKind::OutOfBounds.code());
    // `ma 0` follows the failing read and must not run
    assert!(output.lines().last().unwrap().starts_with("error[OutOfBounds]"), "{output}");
    assert!(!output.contains("ibp> ma 0"));
}
