//! Control CLI for weatherd.
//!
//! Pushes a reading to a running node or fetches its report and health
//! output, standing in for the outdoor sensor during bring-up.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "weatherctl",
    about = "Push readings to and inspect a weatherd node",
    version
)]
struct Cli {
    /// Base URL of the daemon.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    addr: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Push a reading; any subset of the fields may be given.
    Push {
        /// Temperature, degrees.
        #[arg(long)]
        temp: Option<f64>,
        /// Relative humidity, percent.
        #[arg(long)]
        hum: Option<f64>,
        /// Barometric pressure, hPa.
        #[arg(long)]
        pres: Option<f64>,
        /// Battery voltage.
        #[arg(long)]
        batt: Option<f64>,
    },
    /// Fetch the HTML report.
    Report,
    /// Fetch daemon health.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Command::Push {
            temp,
            hum,
            pres,
            batt,
        } => {
            let mut form: Vec<(&str, String)> = Vec::new();
            if let Some(v) = temp {
                form.push(("temp", v.to_string()));
            }
            if let Some(v) = hum {
                form.push(("hum", v.to_string()));
            }
            if let Some(v) = pres {
                form.push(("pres", v.to_string()));
            }
            if let Some(v) = batt {
                form.push(("batt", v.to_string()));
            }

            let ack = client
                .post(format!("{}/update", cli.addr))
                .form(&form)
                .send()
                .await
                .context("failed to reach weatherd")?
                .text()
                .await?;
            println!("{ack}");
        }
        Command::Report => {
            let body = client
                .get(format!("{}/", cli.addr))
                .send()
                .await
                .context("failed to reach weatherd")?
                .text()
                .await?;
            println!("{body}");
        }
        Command::Health => {
            let health: serde_json::Value = client
                .get(format!("{}/v1/health", cli.addr))
                .send()
                .await
                .context("failed to reach weatherd")?
                .json()
                .await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
    }

    Ok(())
}
