//! Tanks: the player and the patrolling enemies

use glam::Vec2;

use super::entity::{Arena, Color, Direction, Entity, Rect};
use super::projectile::Projectile;
use super::rng::RandomSource;
use crate::consts::TANK_SIZE;
use crate::tuning::Tuning;

/// Who steers the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Driven by the directional keys
    Player,
    /// Keeps its heading, occasionally turning at random
    Patrol,
}

/// Directional keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Controls {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// A tank entity
#[derive(Debug, Clone, PartialEq)]
pub struct Tank {
    pub body: Entity,
    pub speed: f32,
    pub mode: ControlMode,
    /// Frames left before the tank may fire again
    pub cooldown: u32,
    /// Side marker (player green, enemies red)
    pub color: Color,
}

impl Tank {
    pub fn new(pos: Vec2, mode: ControlMode, speed: f32, color: Color) -> Self {
        Self {
            body: Entity::new(pos, TANK_SIZE),
            speed,
            mode,
            cooldown: 0,
            color,
        }
    }

    pub fn player(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(pos, ControlMode::Player, tuning.player_speed, Color::GREEN)
    }

    pub fn enemy(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(pos, ControlMode::Patrol, tuning.enemy_speed, Color::RED)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.body.direction
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    /// Advance one frame.
    ///
    /// Player tanks read `controls` (no controls means no movement); patrol
    /// tanks ignore it and roll for a turn. Afterwards the tank is clamped to
    /// the arena and its cooldown ticks down.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        controls: Option<&Controls>,
        arena: &Arena,
        tuning: &Tuning,
        rng: &mut R,
    ) {
        match self.mode {
            ControlMode::Player => {
                if let Some(keys) = controls {
                    self.steer(keys);
                }
            }
            ControlMode::Patrol => self.patrol(tuning.patrol_turn_chance, rng),
        }

        self.body.clamp_to(arena);

        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
    }

    /// Keys are applied Left, Right, Up, Down. Each held key overwrites both
    /// its axis displacement and the facing, so the last held key in that
    /// order decides where the tank points.
    fn steer(&mut self, keys: &Controls) {
        let mut delta = Vec2::ZERO;
        if keys.left {
            delta.x = -self.speed;
            self.body.direction = Direction::Left;
        }
        if keys.right {
            delta.x = self.speed;
            self.body.direction = Direction::Right;
        }
        if keys.up {
            delta.y = -self.speed;
            self.body.direction = Direction::Up;
        }
        if keys.down {
            delta.y = self.speed;
            self.body.direction = Direction::Down;
        }
        self.body.pos += delta;
    }

    fn patrol<R: RandomSource + ?Sized>(&mut self, turn_chance: f32, rng: &mut R) {
        if rng.roll(turn_chance) {
            self.body.direction = rng.direction();
        }
        self.body.pos += self.body.direction.vector() * self.speed;
    }

    /// Spawn a projectile ahead of the barrel if the cooldown has expired.
    pub fn fire(&mut self, target: &mut Vec<Projectile>, color: Color, tuning: &Tuning) {
        if self.cooldown > 0 {
            return;
        }
        let dir = self.body.direction;
        let muzzle = self.body.pos + dir.vector() * tuning.muzzle_offset;
        target.push(Projectile::new(muzzle, dir, tuning.bullet_speed, color));
        self.cooldown = tuning.fire_cooldown_frames;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::seeded;

    /// Never turns; panics if asked for a direction
    struct NeverTurn;

    impl RandomSource for NeverTurn {
        fn roll(&mut self, _probability: f32) -> bool {
            false
        }

        fn direction(&mut self) -> Direction {
            unreachable!("no turn was rolled")
        }
    }

    /// Always turns to the given direction
    struct AlwaysTurn(Direction);

    impl RandomSource for AlwaysTurn {
        fn roll(&mut self, _probability: f32) -> bool {
            true
        }

        fn direction(&mut self) -> Direction {
            self.0
        }
    }

    fn keys(left: bool, right: bool, up: bool, down: bool) -> Controls {
        Controls {
            left,
            right,
            up,
            down,
        }
    }

    #[test]
    fn test_player_moves_only_while_key_held() {
        let tuning = Tuning::default();
        let arena = Arena::default();
        let mut tank = Tank::player(Vec2::new(400.0, 300.0), &tuning);

        tank.update(Some(&Controls::default()), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(400.0, 300.0));

        tank.update(Some(&keys(true, false, false, false)), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(396.0, 300.0));
        assert_eq!(tank.direction(), Direction::Left);

        tank.update(None, &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(396.0, 300.0));
    }

    #[test]
    fn test_last_key_in_order_wins_facing() {
        let tuning = Tuning::default();
        let arena = Arena::default();

        // Left + Right: right is applied last on both counts
        let mut tank = Tank::player(Vec2::new(400.0, 300.0), &tuning);
        tank.update(Some(&keys(true, true, false, false)), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(404.0, 300.0));
        assert_eq!(tank.direction(), Direction::Right);

        // Right + Up: diagonal move, facing up
        let mut tank = Tank::player(Vec2::new(400.0, 300.0), &tuning);
        tank.update(Some(&keys(false, true, true, false)), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(404.0, 296.0));
        assert_eq!(tank.direction(), Direction::Up);

        // All four: x settles on right, y on down, facing down
        let mut tank = Tank::player(Vec2::new(400.0, 300.0), &tuning);
        tank.update(Some(&keys(true, true, true, true)), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(404.0, 304.0));
        assert_eq!(tank.direction(), Direction::Down);
    }

    #[test]
    fn test_diagonal_wall_contact_clamps_both_axes() {
        let tuning = Tuning::default();
        let arena = Arena::default();
        let mut tank = Tank::player(Vec2::new(22.0, 22.0), &tuning);
        tank.update(Some(&keys(true, false, true, false)), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(20.0, 20.0));
        assert!(arena.bounds().contains_rect(&tank.bounds()));
    }

    #[test]
    fn test_patrol_without_turns_runs_into_wall_and_stays() {
        let tuning = Tuning::default();
        let arena = Arena::default();
        let mut tank = Tank::enemy(Vec2::new(100.0, 80.0), &tuning);
        assert_eq!(tank.direction(), Direction::Up);

        // 80 -> 78 -> ... -> 20 takes 30 frames
        for frame in 1..=30 {
            tank.update(None, &arena, &tuning, &mut NeverTurn);
            assert_eq!(tank.pos().y, 80.0 - 2.0 * frame as f32);
        }
        for _ in 0..20 {
            tank.update(None, &arena, &tuning, &mut NeverTurn);
            assert_eq!(tank.pos(), Vec2::new(100.0, 20.0));
        }

        // A turn finally redirects it
        tank.update(None, &arena, &tuning, &mut AlwaysTurn(Direction::Down));
        assert_eq!(tank.pos(), Vec2::new(100.0, 22.0));
        assert_eq!(tank.direction(), Direction::Down);
    }

    #[test]
    fn test_patrol_ignores_controls() {
        let tuning = Tuning::default();
        let arena = Arena::default();
        let mut tank = Tank::enemy(Vec2::new(300.0, 300.0), &tuning);
        tank.update(Some(&keys(true, false, false, false)), &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.pos(), Vec2::new(300.0, 298.0));
    }

    #[test]
    fn test_fire_spawns_one_projectile_and_sets_cooldown() {
        let tuning = Tuning::default();
        let mut tank = Tank::player(Vec2::new(400.0, 520.0), &tuning);
        let mut shots = Vec::new();

        tank.fire(&mut shots, Color::YELLOW, &tuning);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].pos(), Vec2::new(400.0, 496.0));
        assert_eq!(shots[0].vel, Vec2::new(0.0, -8.0));
        assert_eq!(shots[0].vel.length(), tuning.bullet_speed);
        assert_eq!(shots[0].color, Color::YELLOW);
        assert_eq!(tank.cooldown, 15);
    }

    #[test]
    fn test_fire_during_cooldown_is_noop() {
        let tuning = Tuning::default();
        let arena = Arena::default();
        let mut tank = Tank::player(Vec2::new(400.0, 300.0), &tuning);
        let mut shots = Vec::new();

        tank.fire(&mut shots, Color::YELLOW, &tuning);
        tank.update(None, &arena, &tuning, &mut NeverTurn);
        assert_eq!(tank.cooldown, 14);

        tank.fire(&mut shots, Color::YELLOW, &tuning);
        assert_eq!(shots.len(), 1);
        assert_eq!(tank.cooldown, 14);

        for _ in 0..14 {
            tank.update(None, &arena, &tuning, &mut NeverTurn);
        }
        assert_eq!(tank.cooldown, 0);
        tank.fire(&mut shots, Color::YELLOW, &tuning);
        assert_eq!(shots.len(), 2);
    }

    #[test]
    fn test_fire_follows_facing() {
        let tuning = Tuning::default();
        let arena = Arena::default();
        let mut tank = Tank::player(Vec2::new(400.0, 300.0), &tuning);
        tank.update(Some(&keys(false, true, false, false)), &arena, &tuning, &mut NeverTurn);

        let mut shots = Vec::new();
        tank.fire(&mut shots, Color::YELLOW, &tuning);
        assert_eq!(shots[0].vel, Vec2::new(8.0, 0.0));
        assert_eq!(shots[0].pos(), Vec2::new(428.0, 300.0));
    }

    #[test]
    fn test_seeded_patrol_stays_in_arena() {
        let tuning = Tuning {
            patrol_turn_chance: 0.2,
            ..Default::default()
        };
        let arena = Arena::default();
        let mut rng = seeded(99);
        let mut tank = Tank::enemy(Vec2::new(100.0, 80.0), &tuning);
        for _ in 0..2000 {
            tank.update(None, &arena, &tuning, &mut rng);
            assert!(arena.bounds().contains_rect(&tank.bounds()));
        }
    }
}
