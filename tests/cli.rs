use std::process::Command;

#[test]
fn missing_argument_prints_usage_error_and_exits_nonzero() {
    // Empty child env: no credentials, so nothing past the argument
    // check could silently reach the network anyway.
    let output = Command::new(env!("CARGO_BIN_EXE_playtrack"))
        .env_clear()
        .output()
        .expect("failed to spawn playtrack");

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Insufficient arguments!\n"
    );
    assert!(!output.status.success());
}
