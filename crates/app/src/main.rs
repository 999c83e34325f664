use std::process::ExitCode;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;

use replacement::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use replacement::{ReplacementConfig, ReplacementPlugin, ReplacementStats};

mod demo_map;

fn main() -> ExitCode {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    // A config that parses but leaves a slot empty must not start the demo,
    // or suppressed lots would silently vanish
    let config = match ReplacementConfig::load_validated(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid replacement config '{config_path}': {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Building Swap".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((ReplacementPlugin::new(config), demo_map::DemoMapPlugin));

    // Screenshot mode: renders the demo map, saves one frame and exits
    if let Ok(path) = std::env::var("BUILDING_SWAP_SCREENSHOT") {
        app.insert_resource(ScreenshotRequest { frame: 0, path });
        app.add_systems(Update, drive_screenshot);
    }

    match app.run() {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(_) => ExitCode::FAILURE,
    }
}

#[derive(Resource)]
struct ScreenshotRequest {
    frame: u32,
    path: String,
}

fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    stats: Res<ReplacementStats>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;

    // Give substitute scenes a few frames to load before capturing
    if request.frame == 120 {
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(request.path.clone()));
    } else if request.frame > 140 {
        info!(
            "Replaced {} buildings ({} custom, {} rescued)",
            stats.total_replaced(),
            stats.custom_overrides,
            stats.rescued
        );
        exit.send(AppExit::Success);
    }
}
