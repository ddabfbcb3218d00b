use shooter2d::entities::*;

#[test]
fn enum_equality() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);
}

#[test]
fn kinds_have_fixed_sizes() {
    let p = Player::default();
    assert_eq!((p.body.width, p.body.height), (40.0, 40.0));
    let b = Bullet::new(0.0, 0.0, -500.0, BulletOwner::Player);
    assert_eq!((b.body.width, b.body.height), (4.0, 10.0));
    let e = Enemy::new(0.0, 0.0);
    assert_eq!((e.body.width, e.body.height), (40.0, 40.0));
    let q = Particle::new(0.0, 0.0, 1.0, 1.0, Rgb::new(0, 0, 0));
    assert_eq!((q.body.width, q.body.height), (3.0, 3.0));
}

#[test]
fn new_entities_start_active() {
    assert!(Player::default().is_active());
    assert!(Bullet::new(0.0, 0.0, 1.0, BulletOwner::Enemy).is_active());
    assert!(Enemy::new(0.0, 0.0).is_active());
    assert!(Particle::new(0.0, 0.0, 0.0, 0.0, Rgb::new(0, 0, 0)).is_active());
}

#[test]
fn deactivate_clears_flag() {
    let mut e = Enemy::new(0.0, 0.0);
    e.deactivate();
    assert!(!e.is_active());
    assert!(!e.body.active);
}

#[test]
fn body_integrate_is_euler() {
    let mut b = Body::new(10.0, 20.0, 1.0, 1.0).with_velocity(100.0, -50.0);
    b.integrate(0.5);
    assert_eq!((b.x, b.y), (60.0, -5.0));
    b.integrate(0.0);
    assert_eq!((b.x, b.y), (60.0, -5.0));
}

#[test]
fn body_center() {
    let b = Body::new(98.0, 95.0, 40.0, 40.0);
    assert_eq!(b.center(), (118.0, 115.0));
}

#[test]
fn player_defaults() {
    let p = Player::default();
    assert_eq!((p.body.x, p.body.y), (380.0, 520.0));
    assert_eq!(p.health, 100);
    assert_eq!((p.body.vx, p.body.vy), (0.0, 0.0));
}

#[test]
fn enemy_defaults() {
    let e = Enemy::new(5.0, 6.0);
    assert_eq!(e.health, 2);
    assert_eq!(e.shoot_timer, 0.0);
    assert_eq!((e.body.vx, e.body.vy), (0.0, 30.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::default();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(5.0, 5.0));

    assert_eq!(original.player.body.x, 380.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
