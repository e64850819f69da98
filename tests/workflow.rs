use seriate::manager::Manager;
use std::{env, fs, path::PathBuf, process::Command};

#[test]
fn generation_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("generation_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "n_series = 4\n"
        + "n_points = 16\n"
        + "center = 0.5\n"
        + "width = 0.15\n"
        + "jitter = 0.1\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    fn run_bin(args: &[&str]) {
        let bin = PathBuf::from(env!("CARGO_BIN_EXE_seriate"));

        let output = Command::new(bin)
            .args(args)
            .output()
            .expect("failed to execute command");

        let stdout_str =
            std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
        let stderr_str =
            std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

        assert!(
            output.status.success(),
            "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
        );
    }

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    run_bin(&["--data-dir", test_dir_str, "generate"]);
    run_bin(&["--data-dir", test_dir_str, "generate"]);

    // Two runs continue the numbering instead of overwriting.
    let dumps: Vec<_> = (0..8).map(|idx| test_dir.join(format!("timeseries-{idx:04}.msgpack"))).collect();
    for dump in &dumps {
        assert!(dump.is_file(), "missing {dump:?}");
    }

    let series = Manager::load_series(&dumps[0]).expect("failed to load stored series");
    assert_eq!(series.len(), 16);
    assert_eq!(series.times()[0], 0.0);

    run_bin(&["--data-dir", test_dir_str, "inspect"]);

    run_bin(&["--data-dir", test_dir_str, "clean"]);
    assert!(!dumps[0].exists());

    fs::remove_dir_all(&test_dir).ok();
}
