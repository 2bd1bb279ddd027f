use anyhow::{Context, Result};
use serde_json::Value;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_http-status"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("failed to run http-status")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_known_codes() -> Result<()> {
    let output = run(&["404", "100"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["404 Not Found", "100 Continue"]);
    Ok(())
}

#[test]
fn labels_extension_codes() -> Result<()> {
    let output = run(&["499"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["499 Client Closed Request [Nginx]"]
    );
    Ok(())
}

#[test]
fn attaches_message() -> Result<()> {
    let output = run(&["404", "--message", "user not found"])?;
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["404 Not Found: user not found"]);
    Ok(())
}

#[test]
fn unknown_code_fails_but_prints_the_rest() -> Result<()> {
    let output = run(&["999", "418"])?;
    assert!(!output.status.success());
    assert_eq!(stdout_lines(&output), ["418 I'm a Teapot"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown status code: 999"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn piped_logs_have_no_color_codes() -> Result<()> {
    let output = run(&["999"])?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "stderr: {stderr}");
    assert!(!stderr.contains('\x1b'), "stderr: {stderr:?}");
    Ok(())
}

#[test]
fn invalid_code_fails() -> Result<()> {
    let output = run(&["teapot"])?;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn json_output_is_parseable() -> Result<()> {
    let output = run(&["--json", "429", "444"])?;
    assert!(output.status.success());

    let values = stdout_lines(&output)
        .iter()
        .map(|line| serde_json::from_str::<Value>(line))
        .collect::<Result<Vec<_>, _>>()
        .context("stdout should be JSON lines")?;
    assert_eq!(values[0]["code"], 429);
    assert_eq!(values[0]["reason"], "Too Many Requests");
    assert!(values[0].get("extension").is_none());
    assert_eq!(values[1]["extension"], "Nginx");
    Ok(())
}

#[test]
fn list_prints_whole_catalog_in_order() -> Result<()> {
    let output = run(&["--list", "--json"])?;
    assert!(output.status.success());

    let codes = stdout_lines(&output)
        .iter()
        .map(|line| -> Result<u64> {
            let value: Value = serde_json::from_str(line)?;
            Ok(value["code"].as_u64().unwrap_or_default())
        })
        .collect::<Result<Vec<u64>>>()?;
    assert_eq!(codes.len(), 67);
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(codes.first(), Some(&100));
    assert_eq!(codes.last(), Some(&511));
    Ok(())
}

#[test]
fn requires_codes_or_list() -> Result<()> {
    let output = run(&[])?;
    assert!(!output.status.success());
    Ok(())
}
