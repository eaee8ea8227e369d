// Smoke test that drives the compiled binary through a PTY.
// Exercises the real event loop and crossterm input handling without
// touching internal modules.
//
// Requires a TTY (expectrl allocates a pseudo terminal), so it is
// Unix-only and ignored by default.
// Run manually via: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn practice_answer_then_exit() -> Result<(), Box<dyn std::error::Error>> {
    let bin = assert_cmd::cargo::cargo_bin("kanapro");
    let cmd = format!(
        "{} --practice -d symbol-to-text -c gojuon",
        bin.display()
    );

    let mut p = spawn(cmd)?;

    // let the alternate screen come up
    std::thread::sleep(Duration::from_millis(200));

    // first prompt is あ
    p.send("a")?;
    std::thread::sleep(Duration::from_millis(100));
    p.send("\r")?;
    std::thread::sleep(Duration::from_millis(100));

    // ESC leaves practice for home, a second ESC quits from home
    p.send("\x1b")?;
    std::thread::sleep(Duration::from_millis(100));
    p.send("\x1b")?;

    p.expect(Eof)?;
    Ok(())
}

#[test]
#[ignore]
fn chart_opens_and_ctrl_c_quits() -> Result<(), Box<dyn std::error::Error>> {
    let bin = assert_cmd::cargo::cargo_bin("kanapro");
    let mut p = spawn(format!("{} --chart", bin.display()))?;

    std::thread::sleep(Duration::from_millis(200));
    p.send("\x03")?; // Ctrl+C

    p.expect(Eof)?;
    Ok(())
}
