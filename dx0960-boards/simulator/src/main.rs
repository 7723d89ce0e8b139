mod config;

use dx0960_common::*;
use dx0960_core::{Dx0960Panel, SUPPLY_NAMES};
use simulated_panel_host::{
    EventLog, SimBacklight, SimDelay, SimDsi, SimRegulator, SimResetPin, SimResources,
};

use config::SimulatorConfig;

type SimPanel = Panel<Dx0960Panel<SimDsi, SimRegulator, SimResetPin, SimDelay>, SimBacklight>;

pub struct Platform {
    log: EventLog,
    resources: SimResources,
    dsi: SimDsi,
    delay: SimDelay,
}

impl Platform {
    fn init(config: &SimulatorConfig) -> Self {
        let log = EventLog::new();

        let mut resources = SimResources::new(log.clone());
        if config.backlight {
            resources.with_backlight();
        }
        if let Some(name) = config.fail_supply.as_deref() {
            match SUPPLY_NAMES.iter().copied().find(|s| *s == name) {
                Some(supply) => resources.fail_enable_of(supply),
                None => warn!("Unknown supply {}, ignoring fault", name),
            }
        }

        let mut dsi = SimDsi::new(log.clone());
        if let Some(cmd) = config.fail_dcs {
            dsi.fail_on(cmd);
        }

        let delay = SimDelay::new(log.clone()).realtime(config.realtime);

        Self {
            log,
            resources,
            dsi,
            delay,
        }
    }
}

async fn power_cycle(panel: &mut SimPanel) -> PanelResult<()> {
    panel.prepare().await?;

    if let Err(e) = panel.enable().await {
        if let Err(e) = panel.unprepare().await {
            warn!("Failed to unprepare after enable error: {}", e);
        }
        return Err(e);
    }
    info!("Panel on");

    panel.disable().await?;
    panel.unprepare().await?;
    info!("Panel off");
    Ok(())
}

async fn run(config: &SimulatorConfig) -> PanelResult<()> {
    let Platform {
        log,
        mut resources,
        dsi,
        delay,
    } = Platform::init(config);
    let mut registry = PanelList::<1>::new();

    let mut panel = Dx0960Panel::probe(dsi, &mut resources, &mut registry, delay, &config.panel)?;

    let mut connector = Connector::<4>::new(ConnectorType::Dsi);
    let count = panel.get_modes(&mut connector)?;
    info!("{} mode(s) reported", count);
    for mode in connector.probed_modes() {
        info!(
            "Mode {}: {} kHz, {} Hz, {}x{} mm",
            mode.name,
            mode.clock,
            mode.vrefresh(),
            mode.width_mm,
            mode.height_mm
        );
    }

    let result = power_cycle(&mut panel).await;

    let _dsi = Dx0960Panel::remove(panel, &mut registry);

    for event in log.events() {
        debug!("{:?}", event);
    }
    info!("DCS bytes on the wire: {:02x?}", log.dcs_bytes());
    result
}

fn main() {
    let config = std::env::args().nth(1).map(|path| SimulatorConfig::load(&path));
    let level = match &config {
        Some(Ok(cfg)) => cfg.log_level.clone(),
        _ => String::from("info"),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match config {
        Some(Ok(cfg)) => cfg,
        Some(Err(e)) => {
            error!("{}", e);
            std::process::exit(1);
        }
        None => SimulatorConfig::default(),
    };

    if let Err(e) = embassy_futures::block_on(run(&config)) {
        error!("Simulator run failed: {} ({})", e, e.errno());
        std::process::exit(1);
    }
}
