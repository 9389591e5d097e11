//! CLI entrypoint for votacao
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use votacao_application::{ViewState, VotingApi, VotingController};
use votacao_domain::{AgendaId, OutputFormat};
use votacao_infrastructure::{ConfigLoader, FileConfig, HttpVotingApi};
use votacao_presentation::{
    Cli, Command, ConsoleNotifier, LoadingSpinner, OutputFormatter, VotingShell, follow_result,
    formatter_for,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.command == Some(Command::Config) {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let show_progress = !cli.quiet && format == OutputFormat::Table;
    let formatter = formatter_for(format);

    let mut params = config.client_params();
    if let Some(Command::Open {
        duration: Some(minutes),
        ..
    }) = &cli.command
    {
        params = params.with_session_duration(*minutes);
    }

    info!("Starting votacao against {}", config.api.base_url);

    // === Dependency Injection ===
    let api = Arc::new(HttpVotingApi::new(
        &config.api.base_url,
        config.api.timeout(),
    )?);
    let notifier = Arc::new(ConsoleNotifier::new().with_quiet(cli.quiet));
    let mut controller = VotingController::new(api, notifier, params);

    let succeeded = match cli.command.clone().unwrap_or(Command::Shell) {
        Command::Shell => {
            VotingShell::new(controller, formatter)
                .with_progress(show_progress)
                .run()
                .await?;
            true
        }
        Command::List => {
            let loaded =
                LoadingSpinner::wrap("Loading agenda...", show_progress, controller.refresh())
                    .await;
            match loaded {
                Ok(items) => {
                    print!("{}", formatter.format_agenda(&items));
                    true
                }
                Err(_) => false,
            }
        }
        Command::Create { title, description } => {
            let created = LoadingSpinner::wrap(
                "Creating agenda item...",
                show_progress,
                controller.create_item(&title, &description),
            )
            .await;
            match created {
                Ok(item) => {
                    print!("{}", formatter.format_item(&item));
                    true
                }
                Err(_) => false,
            }
        }
        Command::Open { id, .. } => {
            let opened = LoadingSpinner::wrap(
                "Opening session...",
                show_progress,
                controller.open_session(&AgendaId::from(id)),
            )
            .await;
            match opened {
                Ok(outcome) => {
                    info!("Open session outcome: {:?}", outcome);
                    true
                }
                Err(_) => false,
            }
        }
        Command::Vote { id, cpf, choice } => {
            let voted = LoadingSpinner::wrap(
                "Submitting vote...",
                show_progress,
                controller.vote(AgendaId::from(id), &cpf, choice.into()),
            )
            .await;
            voted.is_ok()
        }
        Command::Result { id, watch } => {
            show_result(
                &mut controller,
                formatter.as_ref(),
                AgendaId::from(id),
                watch,
                show_progress,
            )
            .await
        }
        Command::Config => true,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("Invalid configuration: {}", issue);
        }
        bail!(
            "Invalid configuration: {}",
            issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    Ok(config)
}

/// Print the tally once, or follow it until the session closes or Ctrl-C
async fn show_result<A: VotingApi + 'static>(
    controller: &mut VotingController<A>,
    formatter: &dyn OutputFormatter,
    id: AgendaId,
    watch: bool,
    show_progress: bool,
) -> bool {
    let first = LoadingSpinner::wrap(
        "Loading result...",
        show_progress,
        controller.open_result(id.clone()),
    )
    .await;

    if !watch {
        controller.close_result().await;
        return match first {
            Some(tally) => {
                print!("{}", formatter.format_tally(&id, None, &tally));
                true
            }
            None => false,
        };
    }

    let rx = controller.subscribe_result();
    let outcome = tokio::select! {
        state = follow_result(rx, |id, tally| {
            print!("{}", formatter.format_tally(id, None, tally));
        }) => state,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, closing result");
            ViewState::Closed
        }
    };
    controller.close_result().await;

    if outcome == ViewState::Settled {
        println!("Session closed. Final result shown above.");
    }
    true
}
