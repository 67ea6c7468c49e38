use log::info;

use flame_renderer::{
    FlameController, HdrFilePresenter, RenderConfig, VariationRegistry, demo_flame,
    palette_factory,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RenderConfig::from_env();
    let output_path = config.output_path.clone();
    let registry = VariationRegistry::default();
    info!("Palette: {}", config.palette_kind);
    let mut flame = demo_flame(&registry, palette_factory(config.palette_kind))?;

    let mut controller = FlameController::new(HdrFilePresenter::new(), config);
    controller.generate(&mut flame)?;
    controller.write(&output_path)?;

    Ok(())
}
