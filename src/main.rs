use anyhow::{Context, Result};
use pico_args::Arguments;
use powerline_prompt_rust::*;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_WIDTH: usize = 80;

#[derive(Debug)]
struct Args {
    theme: Option<String>,
    config: Option<PathBuf>,
    cwd: Option<PathBuf>,
    width: Option<usize>,
    shell: Option<String>,
    jobs: usize,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            help: args.contains(["-h", "--help"]),
            theme: args.opt_value_from_str("--theme")?,
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")?
                .or_else(|| env::var("POWERLINE_PROMPT_CONFIG").ok().map(PathBuf::from)),
            cwd: args.opt_value_from_str("--cwd")?,
            width: args.opt_value_from_str("--width")?,
            shell: args.opt_value_from_str("--shell")?,
            jobs: args.opt_value_from_str("--jobs")?.unwrap_or(0),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = config::load_config(args.config.clone()).await?;
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    let ctx = prompt_context(&args)?;
    let git_config = config.segments.git_or_default();
    let runner = GitCommand::new(
        RunnerConfig::from_process_env(git_config.program(), &ctx.cwd)
            .with_timeout(git_config.timeout_ms.map(Duration::from_millis)),
    );

    let segments = generate_segments(&ctx, &config, runner).await;
    debug(&format!("Rendered {} segments for {}", segments.len(), ctx.cwd.display()));
    println!("{}", serde_json::to_string(&segments)?);

    Ok(())
}

/// Everything the library needs from the environment, read in one place.
fn prompt_context(args: &Args) -> Result<PromptContext> {
    let cwd = match &args.cwd {
        Some(cwd) => cwd.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let term_width = args
        .width
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(DEFAULT_WIDTH);
    let username = env::var("USER")
        .or_else(|_| env::var("LOGNAME"))
        .unwrap_or_default();
    let shell = args.shell.clone().unwrap_or_else(|| {
        env::var("SHELL")
            .ok()
            .and_then(|s| s.rsplit('/').next().map(str::to_string))
            .unwrap_or_default()
    });

    Ok(PromptContext {
        cwd,
        home: dirs::home_dir(),
        term_width,
        is_root: running_as_root(&username),
        username,
        shell,
        jobs: args.jobs,
    })
}

/// `USER` can be stale under `sudo -E`, so unix asks for the effective uid.
#[cfg(unix)]
fn running_as_root(_username: &str) -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
fn running_as_root(username: &str) -> bool {
    username == "root"
}

fn print_help() {
    println!("powerline-prompt - shell prompt segments with git status");
    println!();
    println!("USAGE:");
    println!("    powerline-prompt [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --theme <THEME>        Theme: {} [default: default]", THEME_NAMES.join(", "));
    println!("    --config <FILE>        Custom config file path");
    println!("    --cwd <DIR>            Directory to describe [default: current directory]");
    println!("    --width <COLUMNS>      Terminal width [default: $COLUMNS or {}]", DEFAULT_WIDTH);
    println!("    --shell <SHELL>        Shell name for username escapes [default: $SHELL]");
    println!("    --jobs <N>             Number of background jobs [default: 0]");
    println!("    --help                 Show this help message");
    println!();
    println!("OUTPUT:");
    println!("    A JSON array of {{name, content, foreground, background}} segments.");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    POWERLINE_PROMPT_THEME     Override theme");
    println!("    POWERLINE_PROMPT_CONFIG    Override config path");
    println!("    POWERLINE_PROMPT_DEBUG     Enable debug logging");
}
