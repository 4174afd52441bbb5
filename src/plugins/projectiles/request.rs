use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::plugins::camera::MainCamera;
use crate::plugins::player::Player;

use super::messages::FireRequest;

/// Damage carried by player shots.
const PLAYER_SHOT_DAMAGE: i32 = 1;

/// Turn the player so its local +Y (the blaster's heading) points at the cursor.
///
/// Missing window, cursor or camera is normal (headless, cursor outside the window) and
/// leaves the rotation unchanged.
pub fn aim_player_at_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut player_tf) = q_player.single_mut() else { return; };
    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };

    let world_cursor = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); return; }
    };

    let dir = world_cursor - player_tf.translation.truncate();
    if dir.length_squared() < 1e-4 {
        return;
    }
    player_tf.rotation = Quat::from_rotation_arc_2d(Vec2::Y, dir.normalize());
}

/// Producer: left click writes a FireRequest for the player's blaster.
///
/// This system intentionally does **not** access any ProjectilePool.
pub fn request_player_fire(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    q_player: Query<Entity, With<Player>>,
    mut writer: MessageWriter<FireRequest>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) { return; }

    let player = match q_player.single() {
        Ok(e) => e,
        Err(e) => { debug!("No single Player: {e:?}"); return; }
    };

    writer.write(FireRequest {
        blaster: player,
        damage: PLAYER_SHOT_DAMAGE,
    });
}
