use std::io::Write;
use std::process::{Command, Output, Stdio};

fn minish(input: &str, extra_args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minish"))
        .arg("--no-config")
        .args(extra_args)
        .env_remove("MINISH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn minish");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_exit_builtin_succeeds() {
    let output = minish("exit\n", &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> ");
}

#[test]
fn test_end_of_input_succeeds() {
    let output = minish("", &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> \n");
}

#[test]
fn test_external_command_output() {
    let output = minish("echo hello   world\nexit\n", &["--prompt", "% "]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "% hello world\n% ");
}

#[test]
fn test_missing_program_keeps_running() {
    let output = minish("minish-no-such-program\necho still here\n", &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("still here"));
    assert!(stderr.contains("minish: minish-no-such-program: "), "{}", stderr);
}

#[test]
fn test_cd_then_pwd() {
    let output = minish("cd /\npwd\nexit\n", &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> > /\n> ");
}

#[test]
fn test_cd_usage_error() {
    let output = minish("cd\nexit\n", &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "minish: expected argument to \"cd\"\n"
    );
}

#[test]
fn test_help_lists_builtins() {
    let output = minish("help\n", &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["cd <path>", "help", "exit"] {
        assert!(stdout.contains(name), "{} missing from {}", name, stdout);
    }
}

#[test]
fn test_bad_config_file_is_usage_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "no equals sign here").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_minish"))
        .arg("--config")
        .arg(file.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 1"));
}
