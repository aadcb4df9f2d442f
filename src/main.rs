//! OtpClip command-line shell
//!
//! Wires the file settings store and a clipboard adapter into the use cases
//! and maps each subcommand onto one. This is the only module that depends
//! on oc-app, oc-infra, and oc-platform at the same time; it assembles, it
//! does not decide.

mod cli;
mod logging;

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use oc_app::{ClipboardBridge, CopyCode, CopyOutcome, ExtractCode, GetClearDelay, SetClearDelay};
use oc_core::ports::{ClipboardSinkPort, SettingsPort};
use oc_core::CLEAR_DELAY_CHOICES;
use oc_infra::paths::settings_path;
use oc_infra::FileSettingsStore;
use oc_platform::{MemoryClipboard, SystemClipboard};

use cli::{Cli, Command, ConfigCommand};

/// Shown when extraction finds nothing.
const NO_CODE_NOTICE: &str = "No OTP detected. The message may not contain a valid 4-8 digit OTP code or OTP-related keywords.";

/// Canned sample messages for the `samples` subcommand.
const SAMPLE_MESSAGES: [&str; 4] = [
    "Your OTP is 123456. Do not share this code with anyone.",
    "Use verification code 8742 to login to your account.",
    "Your PIN: 5931. Valid for 10 minutes.",
    "Hello! Your order #12345 has been shipped. Track it here: example.com",
];

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = logging::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {e}");
        return ExitCode::from(2);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let headless = cli.headless;
    match cli.command {
        Command::Extract { message } => run_extract(message),
        Command::Copy {
            message,
            delay,
            no_wait,
        } => run_copy(message, delay, no_wait, headless).await,
        Command::Samples => Ok(run_samples()),
        Command::Config { config_cmd } => run_config(config_cmd).await,
    }
}

fn run_extract(message: Option<String>) -> anyhow::Result<ExitCode> {
    let message = read_message(message)?;
    match ExtractCode::new().execute(&message) {
        Some(code) => {
            println!("{code}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{NO_CODE_NOTICE}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_copy(
    message: Option<String>,
    delay: Option<u32>,
    no_wait: bool,
    headless: bool,
) -> anyhow::Result<ExitCode> {
    let message = read_message(message)?;

    let bridge = Arc::new(ClipboardBridge::new(clipboard_sink(headless)));
    let use_case = CopyCode::new(Arc::clone(&bridge), settings_store()?);

    let (tx, rx) = oneshot::channel();
    let on_cleared = move || {
        let _ = tx.send(());
    };

    // --no-wait forces a zero delay: the process exits right after the
    // copy, so scheduling a clear it cannot outlive would be a lie.
    let delay_override = if no_wait { Some(0) } else { delay };

    match use_case.execute(&message, delay_override, on_cleared).await {
        CopyOutcome::NoCode => {
            eprintln!("{NO_CODE_NOTICE}");
            Ok(ExitCode::FAILURE)
        }
        CopyOutcome::CopyFailed => {
            eprintln!("Failed to copy");
            Ok(ExitCode::FAILURE)
        }
        CopyOutcome::Copied {
            code,
            clear_delay_secs,
        } => {
            println!("{code}");
            println!("OTP copied");

            if clear_delay_secs == 0 {
                println!("Clipboard will not be automatically cleared");
                return Ok(ExitCode::SUCCESS);
            }

            println!("Clipboard will be cleared {clear_delay_secs} seconds after copying");
            match rx.await {
                Ok(()) => println!("Clipboard cleared"),
                Err(_) => warn!("clipboard clear did not complete"),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_samples() -> ExitCode {
    let use_case = ExtractCode::new();
    for (index, message) in SAMPLE_MESSAGES.iter().enumerate() {
        println!("Sample {}: {message}", index + 1);
        match use_case.execute(message) {
            Some(code) => println!("  -> {code}"),
            None => println!("  -> no code"),
        }
    }
    ExitCode::SUCCESS
}

async fn run_config(config_cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    let settings = settings_store()?;
    match config_cmd {
        ConfigCommand::Get => {
            let secs = GetClearDelay::new(settings).execute().await;
            println!("{secs}");
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Set { secs } => {
            if !CLEAR_DELAY_CHOICES.contains(&secs) {
                warn!(
                    secs,
                    "delay is outside the preset choices {:?}", CLEAR_DELAY_CHOICES
                );
            }
            if SetClearDelay::new(settings).execute(secs).await {
                if secs == 0 {
                    println!("Auto-clear disabled");
                } else {
                    println!("Clipboard will be cleared {secs} seconds after copying");
                }
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("Failed to save settings");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Use the argument when given, otherwise read the whole of stdin.
fn read_message(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(message) => Ok(message),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            Ok(buf)
        }
    }
}

fn settings_store() -> anyhow::Result<Arc<dyn SettingsPort>> {
    let path = settings_path()?;
    debug!(path = %path.display(), "using settings store");
    Ok(Arc::new(FileSettingsStore::new(path)))
}

fn clipboard_sink(headless: bool) -> Arc<dyn ClipboardSinkPort> {
    if headless {
        Arc::new(MemoryClipboard::new())
    } else {
        Arc::new(SystemClipboard::new())
    }
}
