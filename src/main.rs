//! Orrery - olympiad landing experience
//!
//! Desktop entry point for the 3D section hub.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::experience::ExperiencePlugin;
use orrery::input::InputPlugin;
use orrery::navigation::NavigationPlugin;
use orrery::orbit::OrbitPlugin;
use orrery::render::RenderPlugin;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Olympiad".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::srgb(0.01, 0.012, 0.04)))
        // Navigation first: it configures the system sets the others join
        .add_plugins((
            NavigationPlugin,
            ExperiencePlugin,
            OrbitPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
