#[cfg(test)]
mod test {
    use std::process::Command;

    fn run_bin() -> (bool, String) {
        let out = Command::new(env!("CARGO_BIN_EXE_hello_log"))
            .output()
            .expect("failed to run hello_log");
        (
            out.status.success(),
            String::from_utf8(out.stdout).expect("stdout is not utf-8"),
        )
    }

    #[test]
    fn test_greets_once() {
        let (ok, stdout) = run_bin();
        assert!(ok);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" INFO hello_log::app - Hello, world!"));
    }

    #[test]
    fn test_runs_are_independent() {
        for _ in 0..2 {
            let (ok, stdout) = run_bin();
            assert!(ok);
            assert_eq!(stdout.matches("Hello, world!").count(), 1);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_stdout_fails() {
        let full = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .expect("failed to open /dev/full");
        let out = Command::new(env!("CARGO_BIN_EXE_hello_log"))
            .stdout(full)
            .output()
            .expect("failed to run hello_log");
        assert!(!out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("[hello_log] sink error"));
    }
}
