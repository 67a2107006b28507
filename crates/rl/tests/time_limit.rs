use rl::{ChainCartPole, Env, EnvConfig, EnvError, TimeLimit};

fn limited(horizon: u32) -> TimeLimit<ChainCartPole> {
    let env = ChainCartPole::with_seed(&EnvConfig::default(), 17).unwrap();
    TimeLimit::new(env, horizon).unwrap()
}

#[test]
fn horizon_forces_done_and_flags_truncation() {
    let mut env = limited(3);
    env.reset();
    for _ in 0..2 {
        let t = env.step(0).unwrap();
        assert!(!t.done);
        assert!(!env.truncated());
    }
    let t = env.step(1).unwrap();
    assert!(t.done);
    assert_eq!(t.reward, 1.0);
    assert!(env.truncated());
    assert_eq!(env.elapsed(), 3);
    assert_eq!(env.inner().steps_beyond_done(), None, "the kernel itself never ended");
}

#[test]
fn reset_clears_the_step_counter() {
    let mut env = limited(2);
    env.reset();
    env.step(0).unwrap();
    env.step(1).unwrap();
    assert!(env.truncated());

    env.reset();
    assert_eq!(env.elapsed(), 0);
    assert!(!env.truncated());
    assert!(!env.step(0).unwrap().done);
}

#[test]
fn real_failures_are_not_reported_as_truncation() {
    let mut env = limited(10_000);
    env.reset();
    loop {
        let t = env.step(1).unwrap();
        if t.done {
            break;
        }
    }
    assert!(!env.truncated());
    assert_eq!(env.inner().steps_beyond_done(), Some(0));
}

#[test]
fn zero_horizon_is_rejected() {
    let env = ChainCartPole::new(&EnvConfig::default()).unwrap();
    assert!(matches!(TimeLimit::new(env, 0), Err(EnvError::EmptyHorizon)));
}

#[test]
fn invalid_actions_do_not_count_against_the_horizon() {
    let mut env = limited(5);
    env.reset();
    assert!(env.step(9).is_err());
    assert_eq!(env.elapsed(), 0);
    assert_eq!(env.obs_size(), 10);
    assert_eq!(env.action_size(), 2);
}
