use anyhow::Context;
use clap::Parser;
use log::{error, info, LevelFilter};
use std::io;
use tokio::task::spawn_blocking;
use tokio_util::sync::CancellationToken;
use zmq_printer::{Cli, FramePrinter, Listener, ZmqSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::builder().filter_level(LevelFilter::Info).init();
    }

    let endpoints = cli.endpoints()?;
    let printer = FramePrinter::new(io::stdout(), cli.format);
    let poll_interval = cli.poll_interval();

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                signal_token.cancel();
            }
            Err(err) => error!("Unable to listen for shutdown signal: {}", err),
        }
    });

    let printed = spawn_blocking(move || -> zmq_printer::Result<u64> {
        let ctx = zmq::Context::new();
        let socket = ZmqSubscriber::open(&ctx)?;
        let mut listener = Listener::new(socket, printer, poll_interval);
        listener.setup(&endpoints)?;
        listener.run(&shutdown)
    })
    .await
    .context("listener thread panicked")??;

    info!("Printed {} frames", printed);
    Ok(())
}
