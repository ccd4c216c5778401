//! End-to-end runs of the droidres binary against a fake sketchtool.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Stand-in for sketchtool. Artboard names for `<file>` are read from
/// `<file>.names`, one per line. Every call is appended to `calls.log` next
/// to the script. `FAKE_SKIP=1` drops the first artboard from exports.
const FAKE_SKETCHTOOL: &str = r#"#!/bin/sh
echo "$*" >> "$(dirname "$0")/calls.log"
case "$1" in
  --version)
    echo "sketchtool Version 99 (fake)"
    ;;
  list)
    printf '{"pages":[{"name":"Page 1","artboards":['
    sep=''
    while IFS= read -r name; do
      printf '%s{"name":"%s"}' "$sep" "$name"
      sep=','
    done < "$3.names"
    printf ']}]}\n'
    ;;
  export)
    scale=${6#--scales=}
    out=${7#--output=}
    skip=${FAKE_SKIP:-0}
    while IFS= read -r name; do
      if [ "$skip" -gt 0 ]; then
        skip=$((skip - 1))
        continue
      fi
      : > "$out/$name@$scale.png"
      echo "Exported $name@$scale.png"
    done < "$3.names"
    ;;
  *)
    exit 64
    ;;
esac
"#;

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        fs::create_dir(dir.path().join("design")).expect("design dir");
        fs::create_dir(dir.path().join("res")).expect("res dir");
        fs::create_dir(dir.path().join("bin")).expect("bin dir");

        let tool = dir.path().join("bin").join("sketchtool");
        fs::write(&tool, FAKE_SKETCHTOOL).expect("write fake sketchtool");
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).expect("chmod");

        Self { dir }
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    fn tool(&self) -> PathBuf {
        self.path("bin/sketchtool")
    }

    fn design(&self, name: &str, artboards: &[&str]) -> PathBuf {
        let file = self.path("design").join(name);
        fs::write(&file, b"sketch").expect("write design");
        let mut names = artboards.join("\n");
        if !names.is_empty() {
            names.push('\n');
        }
        fs::write(file.with_file_name(format!("{}.names", name)), names).expect("write names");
        file
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.path("bin/calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn export_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("export"))
            .collect()
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_droidres"));
        cmd.current_dir(self.dir.path())
            .env("DROIDRES_SKETCHTOOL", self.tool())
            .args(args);
        for (key, val) in env {
            cmd.env(key, val);
        }
        cmd.output().expect("run droidres")
    }
}

#[test]
fn version_flag_exits_zero_without_sketchtool() {
    let output = Command::new(env!("CARGO_BIN_EXE_droidres"))
        .arg("--version")
        .env("DROIDRES_SKETCHTOOL", "/nonexistent/sketchtool")
        .output()
        .expect("run droidres");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_sketchtool_exits_two() {
    let project = Project::new();
    let output = project.run_with_env(
        &["-i", "design", "-o", "res"],
        &[("DROIDRES_SKETCHTOOL", "/nonexistent/droidres/sketchtool")],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("installed"));
}

#[test]
fn exports_each_density_with_relative_scale() {
    let project = Project::new();
    project.design("icons.sketch", &["ic_menu", "ic_back"]);

    let output = project.run(&["-i", "design", "-o", "res", "-s", "mdpi", "-r", "mdpi", "-r", "xhdpi"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for density in ["mdpi", "xhdpi"] {
        let dir = project.path("res").join(format!("drawable-{}", density));
        assert!(dir.join("ic_menu.png").exists(), "missing ic_menu in {}", density);
        assert!(dir.join("ic_back.png").exists(), "missing ic_back in {}", density);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);
    }

    let exports = project.export_calls();
    assert_eq!(exports.len(), 2);
    assert!(exports[0].contains("--scales=1.000000x"));
    assert!(exports[0].ends_with("drawable-mdpi"));
    assert!(exports[1].contains("--scales=2.000000x"));
    assert!(exports[1].ends_with("drawable-xhdpi"));
}

#[test]
fn single_file_input_is_exported() {
    let project = Project::new();
    project.design("logo.sketch", &["logo"]);

    let output = project.run(&["-i", "design/logo.sketch", "-o", "res", "-r", "hdpi"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(project.path("res/drawable-hdpi/logo.png").exists());
}

#[test]
fn zero_artboards_exits_cleanly_without_export() {
    let project = Project::new();
    project.design("empty.sketch", &[]);

    let output = project.run(&["-i", "design/empty.sketch", "-o", "res"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(project.export_calls().is_empty());
}

#[test]
fn count_mismatch_exits_two_before_next_density() {
    let project = Project::new();
    project.design("icons.sketch", &["ic_a", "ic_b"]);

    let output = project.run_with_env(
        &["-i", "design", "-o", "res", "-r", "hdpi", "-r", "xhdpi"],
        &[("FAKE_SKIP", "1")],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(project.export_calls().len(), 1);
    assert!(!project.path("res/drawable-xhdpi").exists());
}

#[test]
fn non_sketch_input_file_exits_two() {
    let project = Project::new();
    fs::write(project.path("design/icons.fig"), b"figma").unwrap();

    let output = project.run(&["-i", "design/icons.fig", "-o", "res"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains(".sketch"));
}

#[test]
fn missing_input_exits_two() {
    let project = Project::new();
    let output = project.run(&["-i", "nowhere", "-o", "res"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_output_exits_two() {
    let project = Project::new();
    let output = project.run(&["-i", "design"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No output specified"));
}

#[test]
fn missing_config_file_exits_one() {
    let project = Project::new();
    let output = project.run(&["-c", "nope.config", "-i", "design", "-o", "res"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn malformed_config_file_exits_one() {
    let project = Project::new();
    fs::write(project.path("droidres.config"), "input = design\n").unwrap();

    let output = project.run(&[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn config_file_supplies_paths_relative_to_itself() {
    let project = Project::new();
    project.design("icons.sketch", &["ic_star"]);
    fs::create_dir(project.path("conf")).unwrap();
    fs::write(
        project.path("conf/project.config"),
        "[Config]\ninput = ../design\noutput = ../res\ninputResolution = xxhdpi\noutputResolutions = hdpi\n",
    )
    .unwrap();

    let output = project.run(&["-c", "conf/project.config"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.path("res/drawable-hdpi/ic_star.png").exists());
    assert!(project.export_calls()[0].contains("--scales=0.500000x"));
}

#[test]
fn legacy_config_file_name_is_read() {
    let project = Project::new();
    project.design("icons.sketch", &["ic_star"]);
    fs::write(
        project.path("sketchToDroidRes.config"),
        "[DEFAULT]\noutput = res\n\n[Config]\nINPUT = design ; sketch files\noutputresolutions = xxhdpi\n",
    )
    .unwrap();

    let output = project.run(&[]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(project.path("res/drawable-xxhdpi/ic_star.png").exists());
}

#[cfg(debug_assertions)]
#[test]
fn print_config_shows_config_file_layer() {
    let project = Project::new();
    fs::write(
        project.path("droidres.config"),
        "[Config]\ninputResolution = hdpi\noutputResolutions = xhdpi,xxhdpi\n",
    )
    .unwrap();

    let output = project.run(&["--print-config", "-s", "xxxhdpi"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("input=None"));
    assert!(stdout.contains("inputRes=hdpi"));
    assert!(stdout.contains("outputResolutions=xhdpi,xxhdpi"));
    assert!(project.calls().is_empty());
}

#[cfg(debug_assertions)]
#[test]
fn print_args_shows_flags_over_config_file() {
    let project = Project::new();
    fs::write(
        project.path("droidres.config"),
        "[Config]\ninput = design\ninputResolution = hdpi\noutputResolutions = xhdpi\n",
    )
    .unwrap();

    let output = project.run(&["--print-args", "-s", "xxxhdpi", "-o", "elsewhere"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout
            .lines()
            .any(|line| line.starts_with("input=/") && line.ends_with("/design")),
        "{}",
        stdout
    );
    assert!(stdout.contains("output=elsewhere"));
    assert!(stdout.contains("inputRes=xxxhdpi"));
    assert!(stdout.contains("outputResolutions=xhdpi"));
}
