//! Playground CLI - Bridge interface for tooling
//!
//! Commands: encode, decode
//! Outputs JSON to stdout
//! Returns non-zero on decode failure

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use playground_core::{decode_share_link, encode_share_link, share_url, WorkspaceState};

#[derive(Parser)]
#[command(name = "playground-cli")]
#[command(about = "Template Playground - Shareable Workspace Codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a workspace into a share token
    Encode {
        /// JSON payload (WorkspaceState)
        #[arg(short, long)]
        payload: String,

        /// Optional origin; when set, prints a full share URL too
        #[arg(short, long)]
        origin: Option<String>,
    },

    /// Decode a share token back into a workspace
    Decode {
        /// Token as extracted from the share URL
        #[arg(short, long)]
        token: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { payload, origin } => {
            let state: WorkspaceState = match serde_json::from_str(&payload) {
                Ok(s) => s,
                Err(e) => {
                    println!(r#"{{"success": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let mut output = serde_json::json!({
                "success": true,
                "token": encode_share_link(&state),
            });
            if let Some(origin) = origin {
                output["url"] = serde_json::json!(share_url(&origin, &state));
            }
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Decode { token } => match decode_share_link(&token) {
            Ok(state) => {
                let output = serde_json::json!({
                    "success": true,
                    "workspace": state,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
                ExitCode::SUCCESS
            }
            Err(e) => {
                let output = serde_json::json!({
                    "success": false,
                    "error": e.to_string(),
                });
                println!("{}", serde_json::to_string(&output).unwrap());
                ExitCode::from(2)  // Decode failure
            }
        },
    }
}
