//! Whole-match invariants, checked over random seeds and pointer streams

use glam::Vec2;
use proptest::prelude::*;

use paddle_duel::consts::*;
use paddle_duel::sim::{Ball, FixedServe, Game, GameEvent, SeededServe, TickInput};
use paddle_duel::GameConfig;

fn pointer_stream() -> impl Strategy<Value = Vec<Option<f32>>> {
    prop::collection::vec(prop::option::of(-1000.0f32..2000.0), 1..400)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn paddles_stay_on_field(seed in any::<u64>(), pointers in pointer_stream()) {
        let mut game = Game::with_rng(GameConfig::default(), SeededServe::new(seed)).unwrap();
        for pointer_y in pointers {
            game.tick(&TickInput { pointer_y });
            let world = game.world();
            for paddle in [world.left_paddle(), world.right_paddle()] {
                prop_assert!(paddle.y() >= 0.0);
                prop_assert!(paddle.y() <= FIELD_HEIGHT - PADDLE_HEIGHT);
                prop_assert_eq!(paddle.rect.height, PADDLE_HEIGHT);
            }
        }
    }

    #[test]
    fn ball_stays_on_field_or_recenters(seed in any::<u64>(), pointers in pointer_stream()) {
        let mut game = Game::with_rng(GameConfig::default(), SeededServe::new(seed)).unwrap();
        let center = Ball::centered_pos(Vec2::new(FIELD_WIDTH, FIELD_HEIGHT), BALL_SIZE);

        for pointer_y in pointers {
            game.tick(&TickInput { pointer_y });
            let world = game.world();
            let ball = world.ball();

            if world.events().iter().any(|e| matches!(e, GameEvent::Scored(_))) {
                prop_assert_eq!(ball.pos, center);
                prop_assert_eq!(ball.vel.x.abs(), BALL_SPEED);
                prop_assert!(ball.vel.y.abs() <= BALL_SPEED);
            } else {
                prop_assert!(ball.left() >= 0.0 && ball.right() <= FIELD_WIDTH);
                prop_assert!(ball.top() >= 0.0 && ball.bottom() <= FIELD_HEIGHT);
            }
            prop_assert!(ball.vel.x != 0.0);
            prop_assert_eq!(ball.size, BALL_SIZE);
        }
    }

    #[test]
    fn score_counts_scoring_events(seed in any::<u64>(), pointers in pointer_stream()) {
        let mut game = Game::with_rng(GameConfig::default(), SeededServe::new(seed)).unwrap();
        let mut prev = game.world().score();

        for pointer_y in pointers {
            game.tick(&TickInput { pointer_y });
            let world = game.world();
            let score = world.score();
            let scored: Vec<_> = world
                .events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Scored(_)))
                .collect();

            prop_assert!(scored.len() <= 1);
            prop_assert!(score.left >= prev.left && score.right >= prev.right);
            prop_assert_eq!(
                (score.left + score.right) - (prev.left + prev.right),
                scored.len() as u32
            );
            prev = score;
        }
    }

    #[test]
    fn open_field_never_leaves_vertical_bounds(spread in -1.0f32..=1.0) {
        // Too wide for the ball to reach either paddle within the run
        let config = GameConfig {
            field_width: 100_000.0,
            ..GameConfig::default()
        };
        let mut game = Game::with_rng(config, FixedServe::new(true, spread)).unwrap();
        for _ in 0..1000 {
            game.tick(&TickInput::default());
            let ball = game.world().ball();
            prop_assert!(ball.top() >= 0.0 && ball.bottom() <= FIELD_HEIGHT);
        }
        prop_assert_eq!(game.world().score().left + game.world().score().right, 0);
    }

    #[test]
    fn only_playable_configs_start_a_match(
        field_height in 1.0f32..200.0,
        paddle_height in 1.0f32..200.0,
    ) {
        let config = GameConfig {
            field_height,
            paddle_height,
            ..GameConfig::default()
        };
        let valid = config.validate().is_ok();
        match Game::with_rng(config, FixedServe::new(true, 1.0)) {
            Ok(mut game) => {
                prop_assert!(valid);
                for _ in 0..50 {
                    game.tick(&TickInput::pointer(field_height));
                    let world = game.world();
                    prop_assert!(world.ball().top() >= 0.0 && world.ball().bottom() <= field_height);
                    prop_assert!(world.left_paddle().y() >= 0.0);
                }
            }
            Err(_) => prop_assert!(!valid),
        }
    }
}

#[test]
fn flat_serve_across_open_field() {
    let config = GameConfig {
        field_width: 100_000.0,
        ..GameConfig::default()
    };
    let mut game = Game::with_rng(config, FixedServe::new(true, 0.0)).unwrap();
    let start = game.world().ball().pos;
    assert_eq!(game.world().ball().vel, Vec2::new(BALL_SPEED, 0.0));

    for _ in 0..1000 {
        game.tick(&TickInput::default());
    }

    let ball = game.world().ball();
    assert_eq!(ball.pos, start + Vec2::new(5000.0, 0.0));
    assert_eq!(ball.vel, Vec2::new(BALL_SPEED, 0.0));
}

#[test]
fn pointer_drives_only_the_human_paddle() {
    let mut game = Game::with_rng(GameConfig::default(), FixedServe::new(true, 0.0)).unwrap();
    game.tick(&TickInput::pointer(10_000.0));
    assert_eq!(game.world().left_paddle().y(), FIELD_HEIGHT - PADDLE_HEIGHT);

    game.tick(&TickInput::pointer(-10_000.0));
    assert_eq!(game.world().left_paddle().y(), 0.0);

    // Ball travels flat through the middle: opponent never leaves its start
    assert_eq!(
        game.world().right_paddle().center_y(),
        FIELD_HEIGHT / 2.0
    );
}
