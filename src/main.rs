use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use isave_control_panel::{
    config::{Args, PanelConfig},
    externals::{
        device_api::DeviceApiModule, event_logging::EventLoggingModule,
        terminal::TerminalModule, user_input::stdin_lines,
    },
    internals::core::{
        notifier::Notifier,
        ports::{DisplayPort, MultiDisplay},
        system::ClientController,
    },
    session::ViewSession,
};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PanelConfig::try_from(&args)?;
    tracing::info!("Connecting to {}.", config.base_url);

    let DeviceApiModule { device_api_adapter } =
        DeviceApiModule::initialize(config.base_url.clone(), config.request_timeout)?;

    let TerminalModule { panel_adapter } = TerminalModule::initialize(config.styled);

    let EventLoggingModule { display_adapter } = EventLoggingModule::initialize();

    let display: MultiDisplay = vec![
        panel_adapter.clone() as Arc<dyn DisplayPort>,
        display_adapter as Arc<dyn DisplayPort>,
    ];

    let controller = Arc::new(ClientController::new(
        Arc::new(device_api_adapter),
        Arc::new(display),
        Notifier::new(panel_adapter, config.notification_timeout),
        config.poll_failure_policy,
    ));

    let token = CancellationToken::new();
    let session = ViewSession::start(controller, config.poll_interval, &token);
    session.attach_input(stdin_lines(), config.trigger_defaults);

    let session_token = session.token();
    tokio::select! {
        _ = session_token.cancelled() => {}
        res = signal::ctrl_c() => {
            if let Err(e) = res {
                tracing::error!("Failed to listen for ctrl_c. Error: {}", e);
            }
            token.cancel();
        },
    }

    session.shutdown().await;

    Ok(())
}
