//! The swarm orchestrator: agent pool ownership, task submission, and
//! completed-task history

use crate::error::{SwarmError, SwarmResult};
use crate::metrics::SwarmMetrics;
use crate::synthesis::{collect_perspectives, synthesize, SynthesisResult};
use chrono::{DateTime, Utc};
use personaswarm_agent_core::{Agent, AgentId, Task, TaskId, TraitProfile};
use personaswarm_collaborators::{GpuTelemetry, NullTelemetry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Role keyword table used when spawning specialized agents
const ROLE_KEYWORDS: &[(&str, &str)] = &[
    ("research", "researcher"),
    ("writing", "writer"),
    ("audio", "audio_specialist"),
    ("analysis", "analyst"),
    ("creative", "creative_director"),
];

/// Standard role/capability templates for the initial pool
const STANDARD_TEMPLATES: &[(&str, &[&str])] = &[
    ("script_writer", &["writing", "storytelling", "structure"]),
    ("fact_checker", &["research", "verification", "analysis"]),
    ("voice_specialist", &["audio", "voice_cloning", "production"]),
    ("content_curator", &["curation", "selection", "organization"]),
    ("quality_assessor", &["evaluation", "quality_control", "feedback"]),
];

/// Heavy-mode role/capability templates for the initial pool
const HEAVY_TEMPLATES: &[(&str, &[&str])] = &[
    ("ingestion_specialist", &["codebase_analysis", "file_parsing", "structure_mapping"]),
    ("code_analyzer", &["syntax_analysis", "pattern_recognition", "dependency_tracking"]),
    ("workflow_simulator", &["process_modeling", "execution_paths", "scenario_testing"]),
    ("optimization_agent", &["performance_tuning", "resource_management", "efficiency"]),
    ("synthesis_coordinator", &["result_aggregation", "coherence_validation", "integration"]),
    ("validation_expert", &["quality_assurance", "error_detection", "compliance_checking"]),
    ("tts_specialist", &["audio_processing", "voice_synthesis", "bark_integration"]),
    ("gpu_monitor", &["resource_monitoring", "cuda_optimization", "memory_management"]),
];

/// Persona roles spawned per trait profile
const PERSONA_ROLES: &[&str] = &[
    "persona_debater",
    "persona_essayist",
    "persona_critic",
    "persona_contrarian",
    "persona_intellectual",
];

/// Confidence boost applied to persona perspectives during persona synthesis
const PERSONA_BOOST: f64 = 1.2;

/// Orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Agents spawned at startup
    pub initial_agent_count: usize,
    /// Use heavy-mode role templates
    pub heavy_mode: bool,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            initial_agent_count: 8,
            heavy_mode: true,
            seed: None,
        }
    }
}

impl SwarmConfig {
    /// Validate the configuration
    pub fn validate(&self) -> SwarmResult<()> {
        if self.initial_agent_count == 0 {
            return Err(SwarmError::InvalidConfiguration {
                message: "initial agent count must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Record of one completed task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// Task identifier
    pub task_id: TaskId,
    /// The submitted task
    pub task: Task,
    /// Merged synthesis result
    pub result: SynthesisResult,
    /// Agents whose perspectives were requested
    pub participating_agents: Vec<AgentId>,
    /// Wall time in seconds
    pub completion_time: f64,
    /// Completion timestamp
    pub timestamp: DateTime<Utc>,
    /// Persona-swarm fitness of the merged output, for persona tasks
    pub persona_fitness: Option<f64>,
}

/// Owns the agent pool and drives the synthesis engine.
///
/// All pool mutation happens through this single owner; the pool only grows
/// for the lifetime of a run.
pub struct SwarmOrchestrator {
    config: SwarmConfig,
    agents: Vec<Agent>,
    completed: Vec<TaskResult>,
    metrics: SwarmMetrics,
    telemetry: Arc<dyn GpuTelemetry>,
    rng: StdRng,
}

impl SwarmOrchestrator {
    /// Build an orchestrator and spawn the initial pool
    pub fn new(config: SwarmConfig) -> SwarmResult<Self> {
        Self::with_telemetry(config, Arc::new(NullTelemetry))
    }

    /// Build an orchestrator with an injected telemetry collaborator
    pub fn with_telemetry(
        config: SwarmConfig,
        telemetry: Arc<dyn GpuTelemetry>,
    ) -> SwarmResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut orchestrator = Self {
            config,
            agents: Vec::new(),
            completed: Vec::new(),
            metrics: SwarmMetrics::default(),
            telemetry,
            rng,
        };
        orchestrator.spawn_initial_agents();
        Ok(orchestrator)
    }

    /// The owned agent pool
    pub fn pool(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable access to one agent by id
    pub fn agent_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| &a.id == id)
    }

    /// Completed-task history
    pub fn completed_tasks(&self) -> &[TaskResult] {
        &self.completed
    }

    /// Aggregate metrics snapshot, with pool violations folded in
    pub fn metrics(&self) -> SwarmMetrics {
        let mut metrics = self.metrics.clone();
        metrics.mode_violations = self
            .agents
            .iter()
            .map(|a| a.ledger.mode_violations)
            .sum();
        metrics
    }

    fn spawn_initial_agents(&mut self) {
        let templates: &[(&str, &[&str])] = if self.config.heavy_mode {
            HEAVY_TEMPLATES
        } else {
            STANDARD_TEMPLATES
        };
        for i in 0..self.config.initial_agent_count {
            let (role, capabilities) = templates[i % templates.len()];
            let id = AgentId::for_role(role, i + 1);
            let capabilities = capabilities.iter().map(|c| c.to_string()).collect();
            debug!(agent = %id, role, "spawned initial agent");
            self.agents.push(Agent::new(id, role, capabilities));
        }
    }

    /// Spawn one specialized agent for a requirement set.
    ///
    /// The role is chosen by substring-matching requirement tags against the
    /// keyword table, defaulting to a generalist; the new agent's
    /// capabilities are the requirements plus its role and "collaboration".
    pub fn spawn_specialized_agent(&mut self, requirements: &[String]) -> AgentId {
        let mut role = "generalist";
        'outer: for req in requirements {
            let req = req.to_lowercase();
            for (keyword, mapped) in ROLE_KEYWORDS {
                if req.contains(keyword) {
                    role = mapped;
                    break 'outer;
                }
            }
        }

        let id = AgentId::for_role(role, self.agents.len() + 1);
        let mut capabilities: Vec<String> = requirements.to_vec();
        capabilities.push(role.to_string());
        capabilities.push("collaboration".to_string());

        info!(agent = %id, role, "dynamically spawned specialized agent");
        self.agents.push(Agent::new(id.clone(), role, capabilities));
        id
    }

    /// Spawn the persona agent set embodying a trait profile; returns the new
    /// agent ids
    pub fn spawn_persona_agents(&mut self, profile: &TraitProfile) -> Vec<AgentId> {
        let mut ids = Vec::with_capacity(PERSONA_ROLES.len());
        for (i, role) in PERSONA_ROLES.iter().enumerate() {
            let id = AgentId::for_role(role, i + 1);
            self.agents
                .push(Agent::with_profile(id.clone(), *role, profile.clone()));
            ids.push(id);
        }
        info!(count = ids.len(), "spawned persona agents");
        ids
    }

    fn capable_indices(&self, task: &Task) -> Vec<usize> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, a)| a.can_contribute(task))
            .map(|(i, _)| i)
            .collect()
    }

    /// Submit a task to the swarm.
    ///
    /// Filters the pool for capable agents, spawns specialized substitutes
    /// until the 3-5 target band (clamped by pool size) is met, collects one
    /// perspective per capable agent, and merges them.
    pub async fn submit_task(&mut self, task: Task) -> SwarmResult<TaskResult> {
        self.process(task, false).await
    }

    /// Submit a task through the persona path: persona-agent perspectives get
    /// a boosted (clamped) confidence and the merged output is scored for
    /// persona fitness.
    pub async fn submit_persona_task(&mut self, task: Task) -> SwarmResult<TaskResult> {
        self.process(task, true).await
    }

    async fn process(&mut self, task: Task, persona: bool) -> SwarmResult<TaskResult> {
        if self.agents.is_empty() {
            return Err(SwarmError::EmptyPool);
        }

        let started = Instant::now();
        info!(task = %task.id, pool = self.agents.len(), "processing task");

        let mut capable = self.capable_indices(&task);
        let target = 3.max(5.min(self.agents.len()));
        while capable.len() < target {
            self.spawn_specialized_agent(&task.requirements);
            capable.push(self.agents.len() - 1);
        }

        self.metrics.parallel_processing_events += 1;
        let rng = &mut self.rng;
        let mut perspectives = {
            let mut selected: Vec<&mut Agent> = Vec::with_capacity(capable.len());
            let mut remaining: &mut [Agent] = &mut self.agents;
            let mut offset = 0usize;
            for &index in &capable {
                let (_, rest) = remaining.split_at_mut(index - offset);
                let (agent, rest) = rest.split_first_mut().ok_or(SwarmError::EmptyPool)?;
                selected.push(agent);
                remaining = rest;
                offset = index + 1;
            }
            collect_perspectives(selected, &task, rng)
        };

        if persona {
            for perspective in perspectives.iter_mut() {
                if perspective.role.starts_with("persona_") {
                    perspective.confidence = (perspective.confidence * PERSONA_BOOST).min(1.0);
                }
            }
        }

        let result = synthesize(&perspectives);
        let persona_fitness = persona.then(|| {
            personaswarm_agent_core::persona::score_output(
                &result.summary,
                &personaswarm_agent_core::PersonaFitnessConfig::default(),
            )
        });

        let completion_time = started.elapsed().as_secs_f64();
        self.metrics.record_completion(completion_time);
        if result.confidence > 0.5 {
            self.metrics.successful_collaborations += 1;
        }
        let sample = self.telemetry.sample().await;
        self.metrics.gpu_utilization = sample.utilization;

        let participating: Vec<AgentId> =
            capable.iter().map(|&i| self.agents[i].id.clone()).collect();
        for &i in &capable {
            self.agents[i].ledger.record_quality(result.confidence);
            self.agents[i].ledger.collaboration_count += 1;
        }

        let record = TaskResult {
            task_id: task.id.clone(),
            task,
            result,
            participating_agents: participating,
            completion_time,
            timestamp: Utc::now(),
            persona_fitness,
        };
        self.completed.push(record.clone());
        Ok(record)
    }
}
