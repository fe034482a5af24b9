use std::{fs, path::PathBuf};

use tempfile::tempdir;

use texcanvas_cli::Args;

/// Collects all .toml scene files from a directory
fn collect_scene_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &PathBuf, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
        body_only: false,
        compile: false,
        view: false,
    }
}

#[test]
fn e2e_smoke_test_demo_scenes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let scenes = collect_scene_files(PathBuf::from("demos"));
    assert!(!scenes.is_empty(), "No scenes found in demos/");

    let mut failed_scenes = Vec::new();

    for scene_path in &scenes {
        let stem = scene_path.file_stem().unwrap().to_string_lossy().to_string();
        let args = args_for(scene_path, temp_dir.path().join(&stem));

        match texcanvas_cli::run(&args) {
            Ok(written) => {
                let text = fs::read_to_string(&written).expect("Failed to read output");
                assert!(text.starts_with("\\documentclass{standalone}"));
                assert!(text.ends_with("\\end{document}"));
            }
            Err(e) => failed_scenes.push((scene_path.clone(), e)),
        }
    }

    if !failed_scenes.is_empty() {
        eprintln!("\nDemo scenes that failed:");
        for (path, err) in &failed_scenes {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo scene(s) failed unexpectedly", failed_scenes.len());
    }
}

#[test]
fn e2e_smoke_test_error_scenes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let scenes = collect_scene_files(PathBuf::from("demos/errors"));
    assert!(!scenes.is_empty(), "No scenes found in demos/errors/");

    let mut unexpected_successes = Vec::new();

    for scene_path in &scenes {
        let stem = scene_path.file_stem().unwrap().to_string_lossy().to_string();
        let args = args_for(scene_path, temp_dir.path().join(&stem));

        if texcanvas_cli::run(&args).is_ok() {
            unexpected_successes.push(scene_path.clone());
        }
    }

    assert!(
        unexpected_successes.is_empty(),
        "Error scenes rendered without error: {unexpected_successes:?}"
    );
}

#[test]
fn e2e_body_only_writes_body_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let scene = PathBuf::from("demos/spanner.toml");

    let mut args = args_for(&scene, temp_dir.path().join("nested/spanner"));
    args.body_only = true;

    let written = texcanvas_cli::run(&args).expect("Failed to render body");
    assert_eq!(written, temp_dir.path().join("nested/spanner_body.tex"));

    let body = fs::read_to_string(written).expect("Failed to read body");
    assert!(body.starts_with("\\begin{tikzpicture}"));
    assert!(!body.contains("\\documentclass"));
    assert!(body.contains("% Greedy spanner with a highlighted path"));
}

#[test]
fn e2e_config_changes_plot_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[plot]\ntick_count = 0\nlegend = true\n")
        .expect("Failed to write config");

    let mut args = args_for(
        &PathBuf::from("demos/runtime.toml"),
        temp_dir.path().join("runtime"),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    let written = texcanvas_cli::run(&args).expect("Failed to render plot");
    let text = fs::read_to_string(written).expect("Failed to read plot");
    assert!(!text.contains("xtick="));
    assert!(text.contains("\\addlegendentry{\\texttt{greedy}}"));
    assert!(text.contains("\\label{plots:runtime}"));
}

#[cfg(unix)]
#[test]
fn e2e_compile_with_stand_in_compiler() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[toolchain]\ncompiler = \"false\"\n")
        .expect("Failed to write config");

    let mut args = args_for(
        &PathBuf::from("demos/grid.toml"),
        temp_dir.path().join("grid"),
    );
    args.config = Some(config_path.to_string_lossy().to_string());
    args.compile = true;

    let err = texcanvas_cli::run(&args).expect_err("compiler exits unsuccessfully");
    assert_eq!(err.kind(), texcanvas::ErrorKind::Resource);
    assert!(temp_dir.path().join("grid.tex").exists());
}

#[test]
fn e2e_missing_scene_names_path() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let scene = temp_dir.path().join("absent.toml");
    let args = args_for(&scene, temp_dir.path().join("absent"));

    let err = texcanvas_cli::run(&args).expect_err("scene file does not exist");
    assert!(matches!(err, texcanvas::TexError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
