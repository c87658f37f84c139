//! Episode-level tests for [`PointEnv`].

use super::*;
use crate::config::{ObservationMode, RewardShaping, TaskSampling, TransitionMode};
use crate::registry::{make_env, EnvVariant, VariantParams};
use crate::transition::{HAZARD_CENTER, TELEPORT_RADIUS};

fn seeded(variant: EnvVariant) -> PointEnv {
    let params = VariantParams {
        rng: Some(RngMode::Seeded(42)),
        ..VariantParams::default()
    };
    variant.make(&params).unwrap()
}

mod lifecycle {
    use super::*;

    #[test]
    fn new_selects_task_zero() {
        let env = seeded(EnvVariant::PointRobot);
        assert_eq!(env.task_index(), 0);
        assert_eq!(env.goal(), Position::new(1.0, -1.0));
    }

    #[test]
    fn reset_task_switches_goal() {
        let mut env = seeded(EnvVariant::PointRobot);
        env.reset_task(5).unwrap();
        assert_eq!(env.task_index(), 5);
        assert!((env.goal().x - 0.7).abs() < 1e-12);
        assert!((env.goal().y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn reset_task_out_of_range_fails_and_keeps_goal() {
        let mut env = seeded(EnvVariant::PointRobot);
        env.reset_task(2).unwrap();
        let goal = env.goal();
        assert_eq!(
            env.reset_task(8),
            Err(EnvError::TaskIndexOutOfRange { index: 8, len: 8 })
        );
        assert_eq!(env.task_index(), 2);
        assert_eq!(env.goal(), goal);
    }

    #[test]
    fn get_all_task_idx_matches_task_set() {
        let env = seeded(EnvVariant::PointRobot);
        assert_eq!(env.get_all_task_idx(), 0..8);

        let params = VariantParams {
            randomize_tasks: Some(true),
            n_tasks: Some(13),
            ..VariantParams::default()
        };
        let env = make_env("sparse-point-robot", &params).unwrap();
        assert_eq!(env.get_all_task_idx(), 0..13);
    }

    #[test]
    fn uniform_reset_lands_in_unit_square() {
        let mut env = seeded(EnvVariant::PointRobot);
        for _ in 0..100 {
            let obs = env.reset();
            assert_eq!(obs.len(), 2);
            assert!((-1.0..1.0).contains(&obs[0]));
            assert!((-1.0..1.0).contains(&obs[1]));
            assert_eq!(Position::new(obs[0], obs[1]), env.state());
        }
    }

    #[test]
    fn sparse_reset_starts_at_origin() {
        let mut env = seeded(EnvVariant::SparsePointRobot);
        env.step(Action::new(0.1, 0.1));
        assert_eq!(env.reset(), vec![0.0, 0.0]);
    }

    #[test]
    fn seeded_envs_reset_identically() {
        let mut a = seeded(EnvVariant::PointRobot);
        let mut b = seeded(EnvVariant::PointRobot);
        for _ in 0..10 {
            assert_eq!(a.reset(), b.reset());
        }
    }

    #[test]
    fn randomized_goals_reproducible_across_constructions() {
        let params = VariantParams {
            randomize_tasks: Some(true),
            n_tasks: Some(25),
            ..VariantParams::default()
        };
        for name in ["point-robot", "sparse-point-robot"] {
            let a = make_env(name, &params).unwrap();
            let b = make_env(name, &params).unwrap();
            assert_eq!(a.goals(), b.goals(), "{name}");
        }
    }

    #[test]
    fn empty_task_set_rejected() {
        let config = EnvConfig {
            task_sampling: TaskSampling::UniformSquare,
            n_tasks: 0,
            ..EnvConfig::default()
        };
        assert_eq!(PointEnv::new(config).err(), Some(EnvError::EmptyTaskSet));
    }
}

mod dynamics {
    use super::*;

    #[test]
    fn step_adds_action() {
        let mut env = seeded(EnvVariant::SparsePointRobot);
        let result = env.step(Action::new(0.1, -0.05));
        assert_eq!(result.observation, vec![0.1, -0.05]);
        assert!(!result.done);
    }

    #[test]
    fn zero_action_keeps_state_and_reward() {
        let mut env = seeded(EnvVariant::PointRobot);
        env.reset_task(3).unwrap();
        let start = env.state();
        let first = env.step(Action::zero());
        for _ in 0..20 {
            let r = env.step(Action::zero());
            assert_eq!(env.state(), start);
            assert_eq!(r.reward, first.reward);
            assert_eq!(r.observation, first.observation);
        }
    }

    #[test]
    fn dense_reward_is_negative_distance() {
        let mut env = seeded(EnvVariant::PointRobot);
        env.reset_task(6).unwrap();
        for k in 0..30 {
            let a = Action::new(0.01 * k as f64, -0.02);
            let r = env.step(a);
            let s = env.state();
            let g = env.goal();
            let expected = -((s.x - g.x).powi(2) + (s.y - g.y).powi(2)).sqrt();
            assert!(r.reward <= 0.0);
            assert!((r.reward - expected).abs() < 1e-12);
            assert!(r.info.is_empty());
        }
    }

    #[test]
    fn actions_are_not_clipped() {
        let mut env = seeded(EnvVariant::SparsePointRobot);
        env.step(Action::new(3.0, -2.0));
        assert_eq!(env.state(), Position::new(3.0, -2.0));
    }

    #[test]
    fn non_finite_action_propagates() {
        let mut env = seeded(EnvVariant::PointRobot);
        let r = env.step(Action::new(f64::NAN, 0.0));
        assert!(!env.state().is_finite());
        assert!(r.reward.is_nan());
        assert!(!r.done);
    }

    #[test]
    fn goal_scenario_reaches_zero_reward() {
        let mut env = seeded(EnvVariant::PointRobot);
        env.reset_task(4).unwrap();
        assert_eq!(env.goal(), Position::origin());
        env.reset();
        env.set_state(Position::origin());
        let r = env.step(Action::zero());
        assert!(r.reward.abs() < 1e-12);
        assert!(!r.done);
    }

    #[test]
    fn hazard_redirect_teleports_from_center() {
        let mut env = seeded(EnvVariant::SparsePointRobotRandom);
        for action in [Action::zero(), Action::new(0.1, 0.1), Action::new(-0.1, 0.05)] {
            env.set_state(HAZARD_CENTER);
            env.step(action);
            assert!((env.state().norm() - TELEPORT_RADIUS).abs() < 1e-10);
        }
    }

    #[test]
    fn teleport_angles_vary() {
        let mut env = seeded(EnvVariant::SparseLavaPoint);
        let mut landings = Vec::new();
        for _ in 0..8 {
            env.set_state(HAZARD_CENTER);
            env.step(Action::zero());
            landings.push(env.state());
        }
        assert!(landings.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn walking_into_hazard_redirects_on_following_step() {
        let mut env = seeded(EnvVariant::SparsePointRobotRandom);
        env.set_state(Position::new(0.0, -0.65));
        env.step(Action::new(0.0, -0.1));
        assert!((env.state().y + 0.75).abs() < 1e-12);
        env.step(Action::new(0.0, -0.1));
        assert!((env.state().norm() - TELEPORT_RADIUS).abs() < 1e-10);
    }
}

mod rewards {
    use super::*;

    fn half_circle_env(variant: EnvVariant) -> PointEnv {
        let params = VariantParams {
            randomize_tasks: Some(true),
            n_tasks: Some(1),
            rng: Some(RngMode::Seeded(7)),
            ..VariantParams::default()
        };
        variant.make(&params).unwrap()
    }

    #[test]
    fn sparse_reward_reported_in_info() {
        let mut env = half_circle_env(EnvVariant::SparsePointRobotRandom);
        assert_eq!(env.goal(), Position::new(1.0, 0.0));
        let far = env.step(Action::zero());
        assert_eq!(far.reward, 0.0);
        assert_eq!(far.info.get(StepInfo::SPARSE_REWARD_KEY), Some(0.0));

        env.set_state(Position::new(0.75, 0.0));
        let near = env.step(Action::zero());
        assert!((near.reward - 0.75).abs() < 1e-12);
        assert_eq!(near.info.sparse_reward, Some(near.reward));
    }

    #[test]
    fn sparsify_rewards_uses_goal_radius() {
        let params = VariantParams {
            goal_radius: Some(0.3),
            ..VariantParams::default()
        };
        let env = make_env("sparse-point-robot", &params).unwrap();
        assert_eq!(env.sparsify_rewards(-0.25), -0.25);
        assert_eq!(env.sparsify_rewards(-0.5), 0.0);

        let dense = seeded(EnvVariant::PointRobot);
        assert_eq!(dense.sparsify_rewards(-0.5), -0.5);
    }

    #[test]
    fn lava_strip_costs_reward() {
        let mut env = half_circle_env(EnvVariant::SparseLavaPoint);
        let first = env.step(Action::new(0.0, 0.1));
        assert_eq!(first.reward, -5.0);
        assert_eq!(first.info.sparse_reward, Some(-5.0));

        env.set_state(Position::new(0.5, 0.5));
        let beside = env.step(Action::zero());
        assert_eq!(beside.reward, 0.0);
    }

    #[test]
    fn lava_penalty_stacks_on_goal_bonus() {
        let params = VariantParams {
            randomize_tasks: Some(false),
            rng: Some(RngMode::Seeded(3)),
            ..VariantParams::default()
        };
        let mut env = make_env("sparse-lava-point", &params).unwrap();
        env.reset_task(6).unwrap();
        assert_eq!(env.goal(), Position::new(0.0, 0.4));
        env.set_state(Position::new(0.0, 0.4));
        let r = env.step(Action::zero());
        assert_eq!(r.reward, -4.0);
        assert_eq!(r.info.sparse_reward, Some(-4.0));
    }

    #[test]
    fn lava_cost_override() {
        let params = VariantParams {
            lava_cost: Some(2.5),
            rng: Some(RngMode::Seeded(1)),
            ..VariantParams::default()
        };
        let mut env = make_env("sparse-lava-point", &params).unwrap();
        let r = env.step(Action::new(0.0, 0.2));
        assert_eq!(r.reward, -2.5);
    }

    #[test]
    fn sub_variant_returns_dense_channel() {
        let mut env = seeded(EnvVariant::SparsePointRobotSub);
        env.reset_task(0).unwrap();
        let r = env.step(Action::zero());
        let expected_dense = -Position::origin().distance_to(&Position::new(1.0, -1.0));
        assert!((r.reward - expected_dense).abs() < 1e-12);
        assert_eq!(r.info.sparse_reward, Some(0.0));
    }

    #[test]
    fn sub_variant_bonus_near_hazard() {
        let mut env = seeded(EnvVariant::SparsePointRobotSub);
        env.reset_task(3).unwrap();
        env.set_state(Position::new(0.0, -0.9));
        let r = env.step(Action::zero());
        assert!((r.reward - 0.7).abs() < 1e-9);
        assert!((r.info.sparse_reward.unwrap_or_default() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn sub_variant_goal_bonus_on_dense_channel() {
        let mut env = seeded(EnvVariant::SparsePointRobotSub);
        env.reset_task(4).unwrap();
        let r = env.step(Action::new(0.1, 0.0));
        assert!((r.reward - 0.9).abs() < 1e-12);
        assert!((r.info.sparse_reward.unwrap_or_default() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn noisy_observation_channel() {
        let mut env = seeded(EnvVariant::SparsePointRobotNoise);
        assert_eq!(env.observation_dim(), 3);
        let away = env.step(Action::zero());
        assert_eq!(away.observation.len(), 3);
        assert!((0.0..4.0).contains(&away.observation[2]));

        env.set_state(HAZARD_CENTER);
        let near = env.step(Action::zero());
        assert_eq!(near.observation, vec![0.0, -1.0, 0.0]);
    }

    #[test]
    fn custom_composition() {
        let config = EnvConfig {
            task_sampling: TaskSampling::HalfCircle,
            n_tasks: 4,
            transition: TransitionMode::HazardRedirect,
            observation: ObservationMode::Noisy,
            reset: ResetPolicy::Origin,
            reward: RewardShaping::SparseLava {
                goal_radius: 0.25,
                lava_cost: 1.0,
            },
            ..EnvConfig::default().with_seed(9)
        };
        let mut env = PointEnv::new(config).unwrap();
        let r = env.step(Action::new(0.0, 0.5));
        assert_eq!(r.observation.len(), 3);
        assert!(r.reward <= 0.0);
        assert!(r.info.sparse_reward.is_some());
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn step_info_uses_sparse_reward_key() {
        let info = StepInfo {
            sparse_reward: Some(0.75),
        };
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json[StepInfo::SPARSE_REWARD_KEY], 0.75);

        let empty = serde_json::to_string(&StepInfo::default()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn config_round_trips() {
        let config = EnvVariant::SparseLavaPoint.config(&VariantParams::default());
        let json = serde_json::to_string(&config).unwrap();
        let restored: EnvConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn variant_params_from_partial_json() {
        let params: VariantParams =
            serde_json::from_str(r#"{"n_tasks": 5, "randomize_tasks": true}"#).unwrap();
        assert_eq!(params.n_tasks, Some(5));
        assert_eq!(params.goal_radius, None);
        let env = make_env("sparse-point-robot", &params).unwrap();
        assert_eq!(env.n_tasks(), 5);
    }
}
