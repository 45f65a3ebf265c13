mod render;

use anyhow::Context;
use std::io::BufRead;
use std::sync::Arc;

use overlay_core::{ConsoleRegistry, OverlayConfig};
use overlay_platform_winit::{run_winit_app, WinitHost};
use overlay_runtime::{HostServices, Overlay};

use crate::render::{LoggingRenderer, TextureStore};

fn main() -> anyhow::Result<()> {
    let path = std::env::var("OVERLAY_CONFIG").unwrap_or_else(|_| "overlay.toml".into());
    let config = OverlayConfig::load_or_default(&path).with_context(|| format!("config {path}"))?;
    overlay_core::logging::init(&config.log_filter);

    let host = Arc::new(WinitHost::new());
    let console = Arc::new(ConsoleRegistry::new());
    let textures = Arc::new(TextureStore::default());

    let services = HostServices {
        mouse: host.clone(),
        routing: host.clone(),
        surface: Some(host.clone()),
        textures: Some(textures.clone()),
        commands: console.clone(),
        input: host.listeners().clone(),
    };

    let toggle_key = config.toggle_key.clone();
    let overlay = Overlay::new(config, services)?;
    spawn_console(console).context("console thread")?;

    log::info!("press {toggle_key} to give the overlay input, Escape to quit; type `help` for commands");

    run_winit_app(host, overlay, Some(Box::new(LoggingRenderer::default())), "overlay demo")?;

    if textures.live() != 0 {
        log::warn!("{} textures still alive at exit", textures.live());
    }
    Ok(())
}

/// Reads console lines from stdin until EOF.
fn spawn_console(console: Arc<ConsoleRegistry>) -> std::io::Result<()> {
    std::thread::Builder::new()
        .name("console".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match console.exec(&line) {
                    Ok(out) if !out.is_empty() => println!("{out}"),
                    Ok(_) => {}
                    Err(e) => eprintln!("{e}"),
                }
            }
        })?;
    Ok(())
}
