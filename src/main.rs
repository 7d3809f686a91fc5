//! Valor - headless frame transform dump
//!
//! Loads the configuration, builds one frame of projection/view/model transforms
//! and reports them. The raw data printed here is exactly what a renderer uploads.

use valor::{AppConfig, Camera, FrameTransforms, Scene};

fn init_logging(level: &str) {
    // RUST_LOG still takes precedence over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn format_raw(data: &[f32; 16]) -> String {
    data.chunks(4)
        .map(|row| {
            row.iter()
                .map(|v| format!("{:>10.4}", v))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    let config_result = AppConfig::load();
    let config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    init_logging(&config.debug.log_level);
    log::info!("Starting Valor");

    if let Err(e) = config_result {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let cam = &config.camera;
    if cam.pitch_limit < 0.0 || cam.min_fov > cam.max_fov {
        log::warn!("Camera limits are inverted (pitch_limit {}, fov [{}, {}]); normalizing",
            cam.pitch_limit, cam.min_fov, cam.max_fov);
    }
    if cam.pitch_limit.is_nan() || cam.min_fov.is_nan() || cam.max_fov.is_nan() {
        log::warn!("Camera limits contain NaN; the affected clamps are disabled");
    }

    let camera = Camera::from_config(&config.camera);
    let scene = Scene::from_config(&config.scene);
    let aspect = config.window.aspect();

    if camera.near == camera.far {
        log::warn!("Near and far planes are equal ({}); projection will be non-finite", camera.near);
    }
    if !aspect.is_finite() {
        log::warn!("Window size {}x{} gives a non-finite aspect ratio",
            config.window.width, config.window.height);
    }

    let frame = FrameTransforms::build(&camera, &scene, aspect);

    log::info!("'{}' {}x{}: {} instances, {:?} rotation, {} uniform bytes",
        config.window.title,
        config.window.width,
        config.window.height,
        scene.len(),
        scene.mode(),
        frame.uniform_bytes().len());
    log::debug!("Projection:\n{}", format_raw(&frame.projection.raw_data()));
    log::debug!("View:\n{}", format_raw(&frame.view.raw_data()));

    let bad = frame.non_finite_draws();
    if bad > 0 {
        log::warn!("{} of {} draws contain non-finite values", bad, frame.draws.len());
    }

    if config.debug.dump_raw_data {
        for (i, draw) in frame.draws.iter().enumerate() {
            println!("model[{}]:\n{}\n", i, format_raw(&draw.model));
        }
    }
}
