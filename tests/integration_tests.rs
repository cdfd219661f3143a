use powerline_prompt_rust::*;
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;
use tokio::fs;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

async fn init_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo = temp_dir.path();

    git(repo, &["init", "--quiet"]);
    git(repo, &["config", "user.email", "test@example.com"]);
    git(repo, &["config", "user.name", "Test User"]);
    git(repo, &["config", "commit.gpgsign", "false"]);

    fs::write(repo.join("test.txt"), "test content").await.unwrap();
    git(repo, &["add", "."]);
    git(repo, &["commit", "--quiet", "-m", "Initial commit"]);

    temp_dir
}

fn runner_for(repo: &Path) -> GitCommand {
    GitCommand::new(
        RunnerConfig::from_process_env("git", repo).with_timeout(Some(Duration::from_secs(10))),
    )
}

async fn git_segments(repo: &Path) -> Vec<Segment> {
    let config = Config::default();
    let theme = get_theme(&config.theme);
    let ctx = PromptContext {
        cwd: repo.to_path_buf(),
        ..PromptContext::default()
    };
    GitSegment::new(runner_for(repo), config.segments.git_or_default())
        .render(&ctx, &config, &theme)
        .await
}

#[tokio::test]
async fn test_clean_repository() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let temp_dir = init_repo().await;

    let segments = git_segments(temp_dir.path()).await;
    let theme = get_theme("default");

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].name, "git-branch");
    assert!(!segments[0].content.is_empty());
    assert!(!segments[0].content.contains(' '));
    assert_eq!(segments[0].background, theme.repo_clean_bg);
}

#[tokio::test]
async fn test_dirty_repository_and_stash() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let temp_dir = init_repo().await;
    let repo = temp_dir.path();
    let symbols = SymbolTemplates::default();
    let theme = get_theme("default");

    fs::write(repo.join("test.txt"), "changed").await.unwrap();
    let segments = git_segments(repo).await;
    assert_eq!(segments.len(), 1);
    assert!(segments[0].content.ends_with(&format!(" 1{}", symbols.repo_not_staged)));
    assert_eq!(segments[0].background, theme.repo_dirty_bg);

    git(repo, &["stash", "--quiet"]);
    let segments = git_segments(repo).await;
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].background, theme.repo_clean_bg);
    assert_eq!(segments[1].name, "git-status");
    assert_eq!(segments[1].content, format!("1{}", symbols.repo_behind));
}

#[tokio::test]
async fn test_detached_head() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let temp_dir = init_repo().await;
    let repo = temp_dir.path();
    git(repo, &["checkout", "--quiet", "--detach"]);

    let segments = git_segments(repo).await;
    let symbols = SymbolTemplates::default();

    assert!(segments[0]
        .content
        .starts_with(&format!("{} ", symbols.repo_detached)));
}

#[tokio::test]
async fn test_runner_reports_failures() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let temp_dir = TempDir::new().unwrap();
    let runner = runner_for(temp_dir.path());

    let err = runner.run(&["rev-parse", "--show-toplevel"]).await.unwrap_err();
    assert!(matches!(err, CommandError::Failed { .. }));

    let missing = GitCommand::new(RunnerConfig::new("definitely-not-a-real-vcs", temp_dir.path()));
    let err = missing.run(&["status"]).await.unwrap_err();
    assert!(matches!(err, CommandError::Spawn { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_runner_times_out_slow_commands() {
    let temp_dir = TempDir::new().unwrap();
    let slow = GitCommand::new(
        RunnerConfig::from_process_env("sleep", temp_dir.path())
            .with_timeout(Some(Duration::from_millis(200))),
    );

    let started = std::time::Instant::now();
    let err = slow.run(&["5"]).await.unwrap_err();

    assert!(matches!(err, CommandError::Timeout { .. }), "unexpected error: {}", err);
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[test]
fn test_runner_environment_is_minimal() {
    let config = RunnerConfig::new("git", "/tmp")
        .with_home("/home/test")
        .with_path("/usr/bin");
    let env: Vec<_> = config
        .env()
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string_lossy().to_string()))
        .collect();

    assert_eq!(
        env,
        vec![
            ("LANG".to_string(), "C".to_string()),
            ("HOME".to_string(), "/home/test".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_config_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_content = r#"{
        "theme": "low-contrast",
        "segments": {
            "git": {
                "enabled": true,
                "ignoreRepos": ["/srv/huge-monorepo"],
                "assumeUnchangedSize": 512,
                "dirtySource": "describe",
                "timeoutMs": 750
            },
            "user": {"enabled": true, "ignoreUser": "ada"},
            "jobs": {"enabled": false}
        },
        "layout": {"branchMaxLen": 20, "ellipsis": "..."},
        "symbols": {"repoAhead": "+", "repoBehind": "-"}
    }"#;
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, config_content).await.unwrap();

    let config = config::load_config_file(&config_path).await.unwrap();

    assert_eq!(config.theme, "low-contrast");
    let git = config.segments.git_or_default();
    assert!(git.is_ignored("/srv/huge-monorepo"));
    assert!(!git.is_ignored("/srv"));
    assert_eq!(git.assume_unchanged_size, Some(512));
    assert_eq!(git.dirty_source(), DirtySource::Describe);
    assert_eq!(git.timeout_ms, Some(750));
    assert_eq!(git.program(), "git");
    assert_eq!(config.segments.ignore_user(), Some("ada"));
    assert!(!config.segments.jobs_enabled());
    // Missing sections keep their defaults.
    assert!(config.segments.cwd_enabled());

    assert_eq!(config.layout.branch_max_len, 20);
    assert_eq!(config.layout.ellipsis, "...");
    assert_eq!(config.layout.path_max_len, 50);
    assert_eq!(config.layout.branch_prefixes, LayoutConfig::default().branch_prefixes);

    assert_eq!(config.symbols.repo_ahead, "+");
    assert_eq!(config.symbols.repo_behind, "-");
    assert_eq!(config.symbols.repo_detached, SymbolTemplates::default().repo_detached);
}

#[tokio::test]
async fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.json");
    fs::write(&config_path, "{ not json").await.unwrap();

    assert!(config::load_config_file(&config_path).await.is_err());
    assert!(config::load_config_file(&temp_dir.path().join("missing.json"))
        .await
        .is_err());
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = config::parse_config("{}").unwrap();

    assert_eq!(config.theme, "default");
    assert!(config.segments.git_enabled());
    assert_eq!(config.layout, LayoutConfig::default());
    assert_eq!(get_theme("no-such-theme"), get_theme("default"));
}

#[test]
fn test_binary_outputs_segments_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, r#"{"segments": {"user": {"enabled": false}}}"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_powerline-prompt"))
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--cwd",
            temp_dir.path().to_str().unwrap(),
            "--width",
            "80",
            "--jobs",
            "1",
        ])
        .env_remove("POWERLINE_PROMPT_THEME")
        .output()
        .expect("Failed to execute powerline-prompt");

    assert!(output.status.success());
    let segments: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = segments
        .as_array()
        .unwrap()
        .iter()
        .map(|segment| segment["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["cwd", "jobs"]);
    assert_eq!(segments[0]["background"], 31);
}

#[cfg(unix)]
#[test]
fn test_binary_detects_root_from_effective_uid() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"segments": {"cwd": {"enabled": false}, "git": {"enabled": false}, "jobs": {"enabled": false}}}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_powerline-prompt"))
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "--cwd",
            temp_dir.path().to_str().unwrap(),
            "--shell",
            "fish",
        ])
        .env("USER", "root")
        .env_remove("POWERLINE_PROMPT_THEME")
        .output()
        .expect("Failed to execute powerline-prompt");

    assert!(output.status.success());
    let segments: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let user = &segments[0];
    assert_eq!(user["name"], "user");

    let expected = if nix::unistd::geteuid().is_root() {
        "\u{F2BD}"
    } else {
        "root"
    };
    assert_eq!(user["content"], expected);
}
