mod common; // Declare the common module

use assert_cmd::prelude::*;
use common::{create_file, llmstxt_cmd, read};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_single_guide_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    create_file(src.path(), "docs/guide.md", "# Guide\nTwenty bytes");
    fs::create_dir_all(src.path().join("docs/img"))?;
    fs::write(src.path().join("docs/img/diagram.png"), [0x89, b'P', b'N', b'G'])?;

    llmstxt_cmd()
        .arg("--local")
        .arg(src.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--no-title")
        .assert()
        .success();

    assert_eq!(
        read(&out.path().join("llms.txt")),
        "- [guide.md](docs/guide.md)\n"
    );
    assert_eq!(
        fs::read(out.path().join("llms-full.txt"))?,
        b"# Guide\nTwenty bytes"
    );
    assert_eq!(fs::read_dir(out.path())?.count(), 2);

    src.close()?;
    out.close()?;
    Ok(())
}

#[test]
fn test_outputs_default_to_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let cwd = tempdir()?;
    create_file(src.path(), "README.md", "# Readme\n");

    llmstxt_cmd()
        .arg("--local")
        .arg(src.path())
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(cwd.path().join("llms.txt").is_file());
    assert!(cwd.path().join("llms-full.txt").is_file());
    assert!(!src.path().join("llms.txt").exists());
    Ok(())
}

#[test]
fn test_title_uses_directory_name() -> Result<(), Box<dyn std::error::Error>> {
    let base = tempdir()?;
    let src = base.path().join("awesome-docs");
    create_file(&src, "intro.rst", "Intro\n=====\n");
    let out = base.path().join("out");

    llmstxt_cmd()
        .arg("--local")
        .arg(&src)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        read(&out.join("llms.txt")),
        "# awesome-docs\n\n- [intro.rst](intro.rst)\n"
    );
    Ok(())
}

#[test]
fn test_custom_names_and_format() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    create_file(src.path(), "a.md", "A");

    llmstxt_cmd()
        .arg("--local")
        .arg(src.path())
        .arg("--output-dir")
        .arg(out.path())
        .args(["--llms", "index", "--llms-full", "everything", "--format", "md"])
        .assert()
        .success();

    assert!(out.path().join("index.md").is_file());
    assert_eq!(read(&out.path().join("everything.md")), "A");
    assert!(!out.path().join("llms.txt").exists());
    Ok(())
}

#[test]
fn test_nested_output_dir_is_created() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    create_file(src.path(), "a.md", "A");
    let nested = out.path().join("build/llm");

    llmstxt_cmd()
        .arg("--local")
        .arg(src.path())
        .arg("--output-dir")
        .arg(&nested)
        .assert()
        .success();

    assert!(nested.join("llms.txt").is_file());
    Ok(())
}

#[test]
fn test_separator_between_files() -> Result<(), Box<dyn std::error::Error>> {
    let src = tempdir()?;
    let out = tempdir()?;
    create_file(src.path(), "a.md", "First");
    create_file(src.path(), "b.md", "Second\n");

    llmstxt_cmd()
        .arg("--local")
        .arg(src.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    // Order follows the directory listing, so accept either arrangement.
    let full = read(&out.path().join("llms-full.txt"));
    assert!(
        full == "First\n\nSecond\n" || full == "Second\n\nFirst",
        "unexpected content: {:?}",
        full
    );
    Ok(())
}

#[test]
fn test_version_and_help_exit_zero() {
    llmstxt_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    llmstxt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--llms-full"))
        .stdout(predicate::str::contains("--max-size"));
}
