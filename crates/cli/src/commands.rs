//! Command execution: builds the client and automator, runs the selected
//! command and prints its result.

use anyhow::{Context, Result};
use automations::{dispatch, AutomationConfig, Automator, CommandOutcome};
use monday::MondayApi;
use monday_api::{ClientConfig, MondayClient};
use tracing::info;

use crate::args::{Cli, Commands};
use crate::credentials;

fn automator(cli: &Cli) -> Result<Automator<MondayClient>> {
    let config = match &cli.config {
        Some(path) => AutomationConfig::load(path)?,
        None => AutomationConfig::default(),
    };
    let credentials = credentials::load(&cli.credentials)?;
    let client = MondayClient::new(credentials, ClientConfig::with_base_url(&cli.api_url))?;
    Ok(Automator::new(client, config))
}

pub async fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run { automation } => {
            let automator = automator(cli)?;
            let today = chrono::Local::now().date_naive();
            let CommandOutcome::ResetWeek(report) = dispatch(*automation, &automator, today).await?;
            for outcome in &report.boards {
                println!("{outcome}");
            }
            for name in &report.missing_boards {
                println!("{name}: board not found, skipped");
            }
            info!(boards = report.boards.len(), "Automation finished");
        }
        Commands::Boards => {
            let automator = automator(cli)?;
            for board in automator.api().boards().await? {
                println!("{board}");
                for group in &board.groups {
                    println!("  group  {group}");
                }
                for column in &board.columns {
                    println!("  column {column}");
                }
            }
        }
        Commands::Pulses { board } => {
            let automator = automator(cli)?;
            let board = automator.board_named(board).await?;
            let pulses = automator.api().board_pulses(board.id).await?;
            for pulse in &pulses {
                let group = board
                    .groups
                    .iter()
                    .find(|g| pulse.is_in(&g.id))
                    .map_or("?", |g| g.title.as_str());
                println!("{pulse} [{group}]");
                for column in &board.columns {
                    match board.decode_column(pulse, &column.title) {
                        Ok(value) => println!("  {}: {value}", column.title),
                        Err(e) => println!("  {}: <{e}>", column.title),
                    }
                }
            }
        }
        Commands::Users => {
            let automator = automator(cli)?;
            for user in automator.api().users().await? {
                match &user.email {
                    Some(email) => println!("{user} <{email}>"),
                    None => println!("{user}"),
                }
            }
        }
        Commands::ServeTest { addr } => {
            test_endpoint::bind_and_serve(*addr)
                .await
                .with_context(|| format!("test endpoint on {addr} failed"))?;
        }
    }

    Ok(())
}
