//! End-to-end lifecycle tests for the daemon.
//!
//! Each test spawns a real `plinthd serve`, watches its stdout, delivers a
//! real signal, and asserts a clean exit within a bounded window.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

const DEADLINE: Duration = Duration::from_secs(10);

fn spawn_serve(args: &[&str], envs: &[(&str, &str)]) -> (Child, Receiver<String>) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plinthd"));
    cmd.arg("serve")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        // Keep stdout deterministic: only the console contract lines.
        .env("RUST_LOG", "off")
        .env_remove("PLINTH_SERVER_PORT")
        .env_remove("PLINTH_DEBUG");
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().expect("failed to spawn plinthd");
    let stdout = child.stdout.take().expect("stdout not captured");

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    (child, rx)
}

fn await_line(rx: &Receiver<String>, needle: &str) -> String {
    let deadline = Instant::now() + DEADLINE;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(line) if line.contains(needle) => return line,
            Ok(_) => continue,
            Err(_) => panic!("never saw {needle:?} on stdout"),
        }
    }
}

fn deliver(child: &Child, signal: Signal) {
    kill(Pid::from_raw(child.id() as i32), signal).expect("failed to deliver signal");
}

fn wait_with_deadline(child: &mut Child) -> std::process::ExitStatus {
    let deadline = Instant::now() + DEADLINE;
    loop {
        if let Some(status) = child.try_wait().expect("wait failed") {
            return status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            panic!("daemon did not exit within the deadline");
        }
        thread::sleep(Duration::from_millis(20));
    }
}

fn assert_clean_shutdown(mut child: Child, rx: &Receiver<String>, signal: Signal) {
    deliver(&child, signal);
    await_line(rx, "Server shutting down...");
    let status = wait_with_deadline(&mut child);
    assert_eq!(status.code(), Some(0), "expected a clean exit, got {status:?}");
}

#[test]
fn default_startup_then_interrupt() {
    let (child, rx) = spawn_serve(&[], &[]);
    await_line(&rx, "Starting server on port 8080 (debug: false)");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn port_flag_is_reported() {
    let (child, rx) = spawn_serve(&["--port", "9090"], &[]);
    await_line(&rx, "Starting server on port 9090");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn port_env_is_reported() {
    let (child, rx) = spawn_serve(&[], &[("PLINTH_SERVER_PORT", "7070")]);
    await_line(&rx, "Starting server on port 7070");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn flag_beats_environment() {
    let (child, rx) = spawn_serve(&["--port", "9090"], &[("PLINTH_SERVER_PORT", "7070")]);
    await_line(&rx, "Starting server on port 9090");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn environment_beats_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nport = 6060").unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let (child, rx) = spawn_serve(
        &["--config", &path],
        &[("PLINTH_SERVER_PORT", "7070")],
    );
    await_line(&rx, "Starting server on port 7070");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn config_file_port_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "debug = true\n[server]\nport = 6060").unwrap();
    let path = file.path().to_str().unwrap().to_owned();

    let (child, rx) = spawn_serve(&["--config", &path], &[]);
    await_line(&rx, "Starting server on port 6060 (debug: true)");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn debug_env_is_reported() {
    let (child, rx) = spawn_serve(&[], &[("PLINTH_DEBUG", "true")]);
    await_line(&rx, "(debug: true)");
    assert_clean_shutdown(child, &rx, Signal::SIGINT);
}

#[test]
fn sigterm_shuts_down_cleanly() {
    let (child, rx) = spawn_serve(&[], &[]);
    await_line(&rx, "Starting server");
    assert_clean_shutdown(child, &rx, Signal::SIGTERM);
}
