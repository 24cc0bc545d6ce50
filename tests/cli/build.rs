use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, property_names, stderr, stdout_json};

const TYPES: &str = r#"/** A user. */
export type User = {
  name: string;
  email?: string;
  address: {
    city: string;
  };
};

/** Internal settings. */
export interface Settings {
  _token: string;
  retries: number;
}
"#;

const COMMENTS: &str = r#"[
  {
    "name": "User",
    "kind": "typedef",
    "context": { "file": "src/types.ts", "loc": { "start": { "line": 2 } } },
    "properties": [
      { "name": "email", "description": "Contact address", "title": "property" }
    ]
  },
  {
    "name": "Settings",
    "kind": "interface",
    "context": { "file": "src/types.ts", "loc": { "start": { "line": 11 } } }
  },
  {
    "name": "_cache",
    "kind": "constant"
  },
  {
    "name": "Hidden",
    "access": "private"
  },
  {
    "name": "Changelog",
    "kind": "note",
    "access": "private"
  }
]"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("src/types.ts", TYPES)?;
    test.write_file("comments.json", COMMENTS)?;
    Ok(test)
}

#[test]
fn test_build_infers_and_filters() -> Result<()> {
    let test = project()?;

    let output = test.build_command().arg("comments.json").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = stdout_json(&output)?;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["User", "Settings", "_cache", "Changelog"]);

    let user = &json[0];
    assert_eq!(property_names(user), vec!["email", "name", "address", "address.city"]);
    assert_eq!(user["properties"][0]["description"], "Contact address");
    assert_eq!(user["properties"][0]["title"], "property");
    assert_eq!(user["properties"][0]["type"]["type"], "OptionalType");
    assert_eq!(user["properties"][0]["lineNumber"], 4);
    assert_eq!(user["properties"][3]["type"]["name"], "string");

    assert_eq!(property_names(&json[1]), vec!["_token", "retries"]);

    assert_snapshot!(
        stderr(&output).trim_end(),
        @"✓ Published 4 of 5 comments, inferred 5 properties from 1 source file"
    );

    Ok(())
}

#[test]
fn test_build_infer_private() -> Result<()> {
    let test = project()?;

    let output = test
        .build_command()
        .args(["comments.json", "--infer-private", "^_"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = stdout_json(&output)?;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["User", "Settings", "Changelog"]);
    assert_eq!(property_names(&json[1]), vec!["retries"]);

    Ok(())
}

#[test]
fn test_build_access_levels_from_args() -> Result<()> {
    let test = project()?;

    let output = test
        .build_command()
        .args(["comments.json", "--access", "private", "--access", "public"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = stdout_json(&output)?;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Hidden", "Changelog"]);

    Ok(())
}

#[test]
fn test_build_access_levels_from_config() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".docpostrc.json",
        r#"{ "access": ["undefined"], "inferProperties": false }"#,
    )?;

    let output = test.build_command().arg("comments.json").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = stdout_json(&output)?;
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(property_names(&json[0]), vec!["email"]);
    assert!(json[1].get("properties").unwrap().as_array().unwrap().is_empty());

    Ok(())
}

#[test]
fn test_build_no_infer() -> Result<()> {
    let test = project()?;

    let output = test
        .build_command()
        .args(["comments.json", "--no-infer"])
        .output()?;
    assert!(output.status.success());

    let json = stdout_json(&output)?;
    assert_eq!(property_names(&json[0]), vec!["email"]);

    Ok(())
}

#[test]
fn test_build_output_file() -> Result<()> {
    let test = project()?;

    let output = test
        .build_command()
        .args(["comments.json", "-o", "docs.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("-> docs.json"));

    let written: serde_json::Value = serde_json::from_str(&test.read_file("docs.json")?)?;
    assert_eq!(written.as_array().unwrap().len(), 4);

    Ok(())
}

#[test]
fn test_build_source_root() -> Result<()> {
    let test = CliTest::with_file("lib/types.ts", "export type P = { x: number };\n")?;
    test.write_file(
        "comments.json",
        r#"[{ "name": "P", "context": { "file": "types.ts", "loc": { "start": { "line": 1 } } } }]"#,
    )?;

    let output = test
        .build_command()
        .args(["comments.json", "--source-root", "lib"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = stdout_json(&output)?;
    assert_eq!(property_names(&json[0]), vec!["x"]);

    Ok(())
}

#[test]
fn test_build_parse_error_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "export interface Broken {")?;
    test.write_file(
        "comments.json",
        r#"[{ "name": "Broken", "context": { "file": "broken.ts", "loc": { "start": { "line": 1 } } } }]"#,
    )?;

    let output = test.build_command().arg("comments.json").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("1 source file could not be parsed"));

    let json = stdout_json(&output)?;
    assert_eq!(json.as_array().unwrap().len(), 1);

    Ok(())
}

#[test]
fn test_build_invalid_input() -> Result<()> {
    let test = CliTest::with_file("comments.json", "{ not json")?;

    let output = test.build_command().arg("comments.json").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse comments"));

    Ok(())
}

#[test]
fn test_build_missing_input() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().arg("missing.json").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read file"));

    Ok(())
}

#[test]
fn test_build_keeps_unlisted_kinds_and_types() -> Result<()> {
    let test = CliTest::with_file("color.ts", "export type Color = { hex: string, alpha: number };\n")?;
    test.write_file(
        "comments.json",
        r#"[
          {
            "name": "Color",
            "kind": "typedef",
            "context": { "file": "color.ts", "loc": { "start": { "line": 1, "column": 0 } } },
            "properties": [
              {
                "name": "alpha",
                "type": { "type": "NullableType", "expression": { "type": "NameExpression", "name": "number" }, "prefix": true }
              }
            ]
          },
          { "name": "Palette", "kind": "enum" }
        ]"#,
    )?;

    let output = test.build_command().arg("comments.json").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json = stdout_json(&output)?;
    assert_eq!(property_names(&json[0]), vec!["alpha", "hex"]);
    assert_eq!(json[0]["properties"][0]["type"]["type"], "NullableType");
    assert_eq!(json[0]["properties"][0]["type"]["prefix"], true);
    assert_eq!(json[1]["kind"], "enum");

    Ok(())
}
