//! Bevy 2D viewer: draws the universe and feeds clicks / reset back into it.
//!
//! The canvas keeps the simulation's coordinate frame (origin top-left, y
//! down, pixels). The window is the canvas plus a panel underneath holding
//! the reset button.

use std::time::Duration;

use anyhow::Result;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::scenario::Universe;
use crate::simulation::states::{trail_dot_size, NVec2, Rgb};

/// Tags a planet mesh with its index into `Universe::planets`
#[derive(Component)]
struct PlanetIndex(pub usize);

#[derive(Component)]
struct ResetButton;

/// Height of the strip below the canvas that holds the reset button
const PANEL_HEIGHT: f32 = 40.0;

const STAR_Z: f32 = 0.0;
const PLANET_Z: f32 = 1.0;

/// Canvas size, used to map canvas coordinates into Bevy world space
#[derive(Resource, Debug, Clone, Copy)]
struct Canvas {
    width: f32,
    height: f32,
}

impl Canvas {
    fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    /// Canvas (top-left origin, y down) -> world (window centre, y up)
    fn to_world(&self, p: NVec2) -> Vec2 {
        let window_height = self.height + PANEL_HEIGHT;
        Vec2::new(p.x as f32 - self.width / 2.0, window_height / 2.0 - p.y as f32)
    }
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

pub fn run_2d(universe: Universe, cfg: &ScenarioConfig) -> Result<()> {
    let canvas = Canvas {
        width: cfg.window.width as f32,
        height: cfg.window.height as f32,
    };
    let background = to_color(cfg.background()?);

    App::new()
        .insert_resource(universe)
        .insert_resource(canvas)
        .insert_resource(ClearColor(background))
        .insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(cfg.frame_interval_ms)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: WindowResolution::new(canvas.width, canvas.height + PANEL_HEIGHT),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, (setup_scene_system, setup_reset_button_system))
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (spawn_on_click_system, reset_button_system, sync_transforms_system, draw_trails_system).chain(),
        )
        .run();

    Ok(())
}

fn setup_scene_system(mut commands: Commands, universe: Res<Universe>, canvas: Res<Canvas>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let star = universe.star();
    info!("run_2d: star mass {} at ({}, {})", star.mass(), star.position().x, star.position().y);

    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(star.radius() as f32))),
        material: materials.add(ColorMaterial::from(to_color(star.color()))),
        transform: Transform::from_translation(canvas.to_world(star.position()).extend(STAR_Z)),
        ..default()
    });
}

fn setup_reset_button_system(mut commands: Commands) {
    commands
        .spawn(NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(PANEL_HEIGHT),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            ..default()
        })
        .with_children(|panel| {
            panel
                .spawn((
                    ButtonBundle {
                        style: Style {
                            width: Val::Px(80.0),
                            height: Val::Px(28.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        background_color: Color::srgb(0.85, 0.85, 0.85).into(),
                        ..default()
                    },
                    ResetButton,
                ))
                .with_children(|button| {
                    button.spawn(TextBundle::from_section(
                        "Reset",
                        TextStyle {
                            font_size: 18.0,
                            color: Color::BLACK,
                            ..default()
                        },
                    ));
                });
        });
}

fn physics_step_system(mut universe: ResMut<Universe>) {
    universe.step();
}

fn spawn_on_click_system(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    canvas: Res<Canvas>,
    mut universe: ResMut<Universe>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    // cursor_position is already top-left origin, y down
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    // clicks on the button panel are not canvas clicks
    if !canvas.contains(cursor) {
        return;
    }

    let index = universe.planets().len();
    let planet = universe.spawn_planet(NVec2::new(cursor.x as f64, cursor.y as f64));

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(planet.radius() as f32))),
            material: materials.add(ColorMaterial::from(to_color(planet.color()))),
            transform: Transform::from_translation(canvas.to_world(planet.position()).extend(PLANET_Z)),
            ..default()
        },
        PlanetIndex(index),
    ));
}

fn reset_button_system(
    mut commands: Commands,
    buttons: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    planets: Query<Entity, With<PlanetIndex>>,
    mut universe: ResMut<Universe>,
) {
    for interaction in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }
        universe.reset();
        for entity in &planets {
            commands.entity(entity).despawn();
        }
    }
}

fn sync_transforms_system(universe: Res<Universe>, canvas: Res<Canvas>, mut query: Query<(&PlanetIndex, &mut Transform)>) {
    for (PlanetIndex(i), mut transform) in &mut query {
        if let Some(p) = universe.planets().get(*i) {
            let world = canvas.to_world(p.position());
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}

fn draw_trails_system(universe: Res<Universe>, canvas: Res<Canvas>, mut gizmos: Gizmos) {
    for planet in universe.planets() {
        let color = to_color(planet.color());
        let len = planet.trail().len();
        for (i, p) in planet.trail().iter().enumerate() {
            let size = trail_dot_size(planet.radius(), i, len);
            gizmos.circle_2d(canvas.to_world(*p), size as f32, color);
        }
    }
}
