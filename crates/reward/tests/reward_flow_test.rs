//! Episode-to-policy reward flow

use personaswarm_agent_core::{AgentId, Task, TaskId, TaskKind};
use personaswarm_reward::{EpisodeOutcome, FixedSampler, RewardEngine};

fn task(id: &str) -> Task {
    Task::new(TaskId::new(id), TaskKind::General, "discourse")
        .with_expected_quality(0.8)
        .with_target_time(5.0)
}

fn engine() -> RewardEngine {
    RewardEngine::with_sampler(Box::new(FixedSampler(0.8)))
}

#[test]
fn test_mixed_episodes_split_global_counters() {
    let mut engine = engine();
    let crew = vec![AgentId::new("a1"), AgentId::new("a2"), AgentId::new("a3")];

    let good = EpisodeOutcome {
        confidence: 0.85,
        participating_agents: crew.clone(),
        completion_time: 4.2,
    };
    let bad = EpisodeOutcome {
        confidence: 0.1,
        participating_agents: crew,
        completion_time: 60.0,
    };

    engine.record_episode(&good, &task("t1"));
    engine.record_episode(&bad, &task("t2"));

    let global = engine.global_state();
    assert_eq!(global.successful_episodes, 1);
    assert_eq!(global.failed_episodes, 1);
    assert!(global.average_reward > 0.0);
    assert_eq!(engine.history().len(), 2);
}

#[test]
fn test_policy_tightens_as_an_agent_earns() {
    let mut engine = engine();
    let solo = vec![AgentId::new("veteran")];
    let outcome = EpisodeOutcome {
        confidence: 0.9,
        participating_agents: solo.clone(),
        completion_time: 2.0,
    };

    let before = engine.policy_update(&solo[0]);
    for i in 0..40 {
        engine.record_episode(&outcome, &task(&format!("t{i}")));
    }
    let after = engine.policy_update(&solo[0]);

    assert!(after.exploration_rate < before.exploration_rate);
    assert!(after.collaboration_tendency > before.collaboration_tendency);
    assert!(after.confidence_threshold > before.confidence_threshold);
    assert!(after.collaboration_tendency <= 0.9);
}

#[test]
fn test_reward_history_preserves_order_and_ids() {
    let mut engine = engine();
    let crew = vec![AgentId::new("a1")];
    for id in ["first", "second", "third"] {
        let outcome = EpisodeOutcome {
            confidence: 0.7,
            participating_agents: crew.clone(),
            completion_time: 5.0,
        };
        engine.record_episode(&outcome, &task(id));
    }
    let ids: Vec<&str> = engine.history().iter().map(|e| e.task_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}
