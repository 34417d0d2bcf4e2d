//! Integration tests for the mode protocol across the public API

use personaswarm_agent_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mode_register_is_long_lived() {
    // no designated terminal state: the register keeps whatever mode
    // persists, across any number of generations
    let mut agent = Agent::new(AgentId::new("a1"), "reviewer", vec!["review".to_string()]);
    let mut rng = StdRng::seed_from_u64(11);

    assert!(agent.enter_mode(RiperMode::Review, "ENTER REVIEW MODE"));
    let task = Task::new(TaskId::new("t"), TaskKind::General, "durability");
    for _ in 0..5 {
        agent.generate_perspective(&task, &mut rng).unwrap();
    }
    assert_eq!(agent.mode.current_mode, RiperMode::Review);
    assert_eq!(agent.mode.observations.len(), 5);
}

#[test]
fn test_violations_never_fail_the_agent() {
    let mut agent = Agent::new(AgentId::new("a1"), "writer", vec![]);
    for _ in 0..10 {
        agent.enter_mode(RiperMode::Execute, "EXECUTE NOW");
    }
    assert_eq!(agent.ledger.mode_violations, 10);

    // the agent still works after any number of violations
    let mut rng = StdRng::seed_from_u64(1);
    let task = Task::new(TaskId::new("t"), TaskKind::General, "resilience");
    assert!(agent.generate_perspective(&task, &mut rng).is_ok());
}

#[test]
fn test_compliance_decrements_through_hedged_output() {
    let mut agent = Agent::new(AgentId::new("a1"), "writer", vec![]);
    agent.mode.add_observation("I assume the corpus is loaded");
    agent.mode.add_observation("this might be wrong");
    assert_eq!(agent.mode.hallucination_count, 2);
    assert!((agent.mode.compliance_score - 0.8).abs() < 1e-12);
}
