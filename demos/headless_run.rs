//! Headless driver for the locomotion core.
//!
//! Plays a scripted key sequence at a fixed 60 Hz and logs the character
//! state once per simulated second and on every animation change.
//!
//! ```text
//! RUST_LOG=debug cargo run --example headless_run -- [config.json]
//! ```

use strider::{
    ActionId, AnimationClip, ButtonState, CharacterAsset, GroundPlane, Key,
    LocomotionConfig, LocomotionSystem,
};

const FRAME_DT: f32 = 1.0 / 60.0;

/// (frame, key, state)
const SCRIPT: &[(u32, Key, ButtonState)] = &[
    (30, Key::W, ButtonState::Pressed),
    (90, Key::D, ButtonState::Pressed),
    (120, Key::Space, ButtonState::Pressed),
    (122, Key::Space, ButtonState::Released),
    (180, Key::W, ButtonState::Released),
    (180, Key::D, ButtonState::Released),
    (200, Key::P, ButtonState::Pressed),
    (201, Key::P, ButtonState::Released),
    (320, Key::O, ButtonState::Pressed),
    (321, Key::O, ButtonState::Released),
];

/// Clip lengths of the reference robot rig.
fn robot_clips() -> Vec<AnimationClip> {
    [
        ("Dance", 1.88),
        ("Death", 1.25),
        ("Idle", 2.0),
        ("Jump", 1.0),
        ("No", 1.63),
        ("Punch", 0.83),
        ("Running", 0.71),
        ("Sitting", 1.25),
        ("Standing", 0.83),
        ("ThumbsUp", 1.5),
        ("Walking", 1.04),
        ("WalkJump", 0.92),
        ("Wave", 1.5),
        ("Yes", 1.13),
    ]
    .into_iter()
    .map(|(name, duration)| AnimationClip::new(name, duration))
    .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => LocomotionConfig::from_json_file(&path)?,
        None => LocomotionConfig::default(),
    };

    let mut system = LocomotionSystem::new(config, Box::new(GroundPlane::default()))?;
    let mut input = system.new_input();

    system.on_asset_loaded(Ok(CharacterAsset {
        clips: robot_clips(),
    }))?;

    let mut last_action: Option<ActionId> = None;

    for frame in 0..480_u32 {
        for &(_, key, state) in SCRIPT.iter().filter(|(f, _, _)| *f == frame) {
            input.inject_key(key, state);
        }

        system.tick(&input, FRAME_DT);
        input.start_frame();

        let state = system.state();
        if state.current_action != last_action || frame % 60 == 0 {
            log::info!(
                "frame {frame:>3}: action={:?} pos=({:.2}, {:.2}, {:.2}) yaw={:.2} vy={:.2} grounded={}",
                state.current_action,
                state.position.x,
                state.position.y,
                state.position.z,
                state.yaw(),
                state.vertical_velocity,
                state.is_grounded,
            );
            last_action = state.current_action;
        }
    }

    Ok(())
}
