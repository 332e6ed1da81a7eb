use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn lls() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lls"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_directory_prints_one_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("ghost");

    let output = lls().arg(&missing).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("ghost"));
    Ok(())
}

#[test]
fn unknown_option_warns_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a"), b"0123456789")?;
    fs::write(dir.path().join("b"), b"01234567890123456789")?;

    let output = lls().arg("-q").arg("-s").arg(dir.path()).output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "b  a\n");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("unknown option: -q"));
    assert!(stderr.contains("lls --help"));
    Ok(())
}

#[test]
fn one_column_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("only"))?;

    let output = lls().arg("-1").arg(dir.path()).output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "only\n");
    Ok(())
}

#[test]
fn version_flag_short_circuits() -> Result<(), Box<dyn std::error::Error>> {
    let output = lls().arg("--version").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("lls "));
    Ok(())
}

#[test]
fn repeated_flag_still_lists() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("file"), b"abc")?;

    for args in [&["-l", "-l"][..], &["-ll"][..], &["-1", "-1"][..]] {
        let output = lls().args(args).arg(dir.path()).output()?;
        assert!(output.status.success(), "args {args:?}: {output:?}");
        assert!(String::from_utf8(output.stdout)?.contains("file"));
    }
    Ok(())
}

#[test]
fn last_directory_argument_wins() -> Result<(), Box<dyn std::error::Error>> {
    let first = tempdir()?;
    let second = tempdir()?;
    fs::write(first.path().join("from_first"), b"x")?;
    fs::write(second.path().join("from_second"), b"x")?;

    let output = lls().arg("-1").arg(first.path()).arg(second.path()).output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "from_second\n");

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("ignoring extra directory argument"));
    assert!(stderr.contains(&first.path().display().to_string()));
    Ok(())
}
