use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("Created .docpostrc.json"));

    let content = test.read_file(".docpostrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed.get("access").is_some(), "Config should have 'access' field");
    assert!(parsed.get("sourceRoot").is_some(), "Config should have 'sourceRoot' field");
    assert!(test.root().join(".docpostrc.json").exists());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".docpostrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".docpostrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("comments.json", r#"[{ "name": "a" }]"#)?;

    let output = test.build_command().arg("comments.json").output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
