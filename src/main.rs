use anyhow::Context;
use clap::Parser;
use opnsense_ip_gateway::cli::Cli;
use opnsense_ip_gateway::gateway::Gateway;
use opnsense_ip_gateway::opnsense_api::OpnsenseClient;
use opnsense_ip_gateway::prometheus::Prometheus;
use opnsense_ip_gateway::tracing_setup::{get_subscriber, init_subscriber};
use opnsense_ip_gateway::{App, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber(String::from("opnsense-ip-gateway"), String::from("info"));
    init_subscriber(subscriber)?;

    let args = Cli::parse();

    let config = Config::try_from(&args)?;
    if config.accept_invalid_certs {
        info!("TLS certificate verification towards the firewall is disabled");
    }
    let firewall = OpnsenseClient::new(config)?;
    let app = App::new(firewall);

    info!(msg = "Listening", addr = %args.listen_addr, metrics = %args.metrics_addr);
    let gateway = Gateway::new(args.listen_addr, app).serve();
    let metrics = Prometheus::new(args.metrics_addr).serve();

    let mut task_set = tokio::task::JoinSet::new();
    task_set.spawn(async move { gateway.await.context("error serving gateway") });
    task_set.spawn(async move { metrics.await.context("error serving metrics") });

    while let Some(res) = task_set.join_next().await {
        if let Err(err) = res? {
            error!(msg = "Exiting", ?err);
            return Err(err);
        }
    }

    info!("Exit!");

    Ok(())
}
