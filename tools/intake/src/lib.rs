pub mod answer_file;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod gaps;
pub mod interview;
pub mod logging;
pub mod runtime;
pub mod summary;
pub mod types;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use config::{load_config, CliOverrides};
use errors::IntakeError;
use logging::append_run_log;
use runtime::ProductionRuntime;
use serde_json::json;
use types::{EnvMap, OutputFormat};

#[derive(Debug, Clone, Parser)]
#[command(name = "intake")]
#[command(about = "Guided interview for software failure reports")]
pub struct Cli {
    /// JSON file mapping question keys to answers; skips the interview.
    #[arg(long)]
    pub answers: Option<std::path::PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<CliFormat>,
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
    /// Print the effective question catalog and exit.
    #[arg(long, default_value_t = false)]
    pub questions_only: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFormat {
    Text,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

pub fn run() -> Result<i32, IntakeError> {
    let args = std::env::args_os().collect::<Vec<_>>();
    let env = std::env::vars_os().collect::<Vec<_>>();
    let runtime = ProductionRuntime::new();
    run_with_runtime(&args, &env, &runtime)
}

pub fn run_with_runtime(
    args: &[std::ffi::OsString],
    env: &[(std::ffi::OsString, std::ffi::OsString)],
    runtime: &ProductionRuntime,
) -> Result<i32, IntakeError> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{error}");
                return Ok(0);
            }
            _ => return Err(IntakeError::Cli(error.to_string())),
        },
    };

    let env_map = env_to_map(env);

    let overrides = CliOverrides {
        config_path: cli.config.clone(),
        format: cli.format.map(Into::into),
    };

    let (cfg, catalog) = load_config(&overrides, runtime.file_system.as_ref())?;

    if cli.questions_only {
        for question in &catalog {
            let marker = if question.required { "required" } else { "optional" };
            runtime
                .terminal
                .write_line(&format!("{} [{marker}] {}", question.key, question.prompt))?;
        }
        return Ok(0);
    }

    let answers = if let Some(path) = &cli.answers {
        answer_file::load_answer_map(runtime.file_system.as_ref(), path, &catalog)?
    } else {
        if let Some(reason) = interview::is_non_interactive(&env_map, runtime.terminal.as_ref()) {
            return Err(IntakeError::Cli(format!(
                "the interview needs an interactive terminal ({}); pass --answers <path> to run non-interactively",
                reason.describe()
            )));
        }
        interview::run_interview(runtime.terminal.as_ref(), &catalog)?
    };

    let gap_list = gaps::gap_keys(&catalog, &answers);
    let output = match cfg.output.format {
        OutputFormat::Text => summary::render_text(&catalog, &answers, &gap_list),
        OutputFormat::Json => summary::render_json(&catalog, &answers, &gap_list)?,
    };
    runtime.terminal.write_line(&output)?;

    append_run_log(
        "info",
        "summary.rendered",
        json!({
            "format": cfg.output.format.as_str(),
            "gap_count": gap_list.len(),
        }),
    );
    Ok(0)
}

pub fn render_help() -> String {
    let mut cmd = Cli::command();
    let mut buffer = Vec::new();
    cmd.write_long_help(&mut buffer).expect("write help to vec");
    String::from_utf8(buffer).expect("utf8")
}

fn env_to_map(env: &[(std::ffi::OsString, std::ffi::OsString)]) -> EnvMap {
    let mut map = EnvMap::new();
    for (key, value) in env {
        if let (Some(key), Some(value)) = (key.to_str(), value.to_str()) {
            map.insert(key.to_string(), value.to_string());
        }
    }
    map
}
