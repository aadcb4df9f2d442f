//! Command-line argument definitions for OtpClip.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "otpclip")]
#[command(about = "Extract OTP codes from message text, copy them, auto-clear the clipboard")]
#[command(version)]
pub struct Cli {
    /// Use an in-memory clipboard instead of the system one
    /// (for machines without a display server)
    #[arg(long, global = true)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract the OTP code from a message (reads stdin when MESSAGE is omitted)
    Extract {
        /// Message text to extract from
        message: Option<String>,
    },
    /// Extract, copy to the clipboard, and wait for the scheduled clear
    Copy {
        /// Message text to extract from
        message: Option<String>,

        /// Clear delay in seconds for this copy only, overriding the stored setting
        #[arg(long)]
        delay: Option<u32>,

        /// Exit right after the copy; no clear is scheduled
        #[arg(long = "no-wait")]
        no_wait: bool,
    },
    /// Run the reference sample messages through the extractor
    Samples,
    /// Read or write the stored clear delay
    Config {
        #[command(subcommand)]
        config_cmd: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the stored clear delay in seconds (0 = never)
    Get,
    /// Store a new clear delay
    Set {
        /// Delay in seconds; 0 disables auto-clear
        secs: u32,
    },
}
