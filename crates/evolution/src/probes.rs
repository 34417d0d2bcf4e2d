//! Fixed probe suite used to evaluate candidate profiles

use personaswarm_agent_core::{Difficulty, Task, TaskId, TaskKind};

/// The six probe tasks every candidate is evaluated against, in order
pub fn probe_suite() -> Vec<Task> {
    vec![
        Task::new(
            TaskId::new("probe_debate_religion"),
            TaskKind::Debate,
            "religion and society",
        )
        .with_difficulty(Difficulty::Advanced),
        Task::new(
            TaskId::new("probe_essay_honesty"),
            TaskKind::Essay,
            "intellectual honesty",
        )
        .with_difficulty(Difficulty::Masterful),
        Task::new(
            TaskId::new("probe_criticism_discourse"),
            TaskKind::Criticism,
            "modern discourse",
        )
        .with_difficulty(Difficulty::Penetrating),
        Task::new(
            TaskId::new("probe_general_truth"),
            TaskKind::General,
            "truth and evidence",
        )
        .with_difficulty(Difficulty::Authoritative),
        Task::new(
            TaskId::new("probe_debate_consciousness"),
            TaskKind::Debate,
            "the nature of consciousness",
        )
        .with_difficulty(Difficulty::Brilliant),
        Task::new(
            TaskId::new("probe_essay_morality"),
            TaskKind::Essay,
            "moral philosophy in practice",
        )
        .with_difficulty(Difficulty::Devastating),
    ]
}
