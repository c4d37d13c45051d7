use anyhow::Context;
use clap::Parser;
use mobile::{
    config::{LogConfig, MobileConfig},
    logging,
    module::{DeviceProvider, PowerSourceProvider},
    DeviceScreen, MobileApplication,
};
use mobile_config::ConfigProvider;
use mobile_di::GraphBuilder;

#[derive(Parser, Debug)]
#[command(name = "mobile", version, about = "Wires a mobile object graph into a screen")]
struct Cli {
    /// Tag attached to wiring diagnostics
    #[arg(long, default_value = "Dagger2")]
    tag: String,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Log JSON lines
    #[arg(long)]
    json: bool,

    /// Leave the processor unbound, the screen then fails to start
    #[arg(long)]
    without_processor: bool,
}

fn without_processor(builder: GraphBuilder) -> GraphBuilder {
    builder
        .bind(PowerSourceProvider)
        .bind(DeviceProvider)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logger(&LogConfig::new(cli.verbose, cli.json))?;

    let mut configs = ConfigProvider::new();
    configs.add_config(MobileConfig { tag: cli.tag })?;

    let mut app = MobileApplication::new(configs);
    if cli.without_processor {
        app = app.with_module(without_processor);
    }

    let mut screen = DeviceScreen::new();
    screen
        .on_create(&app, None)
        .context("Mobile screen failed to start")?;
    screen.on_destroy();

    Ok(())
}
