use super::shared::present;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use std::fmt::Write as _;

/// Agent as returned by `pools/{id}/agents?includeAssignedRequest=true`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    /// Only the presence of the key matters.
    #[serde(default, deserialize_with = "present")]
    pub assigned_request: Option<Value>,
}

impl Agent {
    pub fn is_active(&self) -> bool {
        self.assigned_request.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn is_online(&self) -> bool {
        self.status.as_deref() == Some("online")
    }
}

/// Per-pool agent counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub total_agents: u64,
    pub active_agents: u64,
    pub idle_agents: u64,
    pub enabled_agents: u64,
    pub disabled_agents: u64,
    pub online_agents: u64,
    pub offline_agents: u64,
    /// Active agents as a percentage of enabled agents. Not guarded against
    /// zero enabled agents, so it may be `NaN` or infinite.
    pub agent_utilization: f64,
}

impl AgentStats {
    pub fn tally<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut stats = Self::default();

        for agent in agents {
            stats.total_agents += 1;
            if agent.is_active() {
                stats.active_agents += 1;
            }
            if agent.is_enabled() {
                stats.enabled_agents += 1;
            } else {
                stats.disabled_agents += 1;
            }
            if agent.is_online() {
                stats.online_agents += 1;
            } else {
                stats.offline_agents += 1;
            }
        }

        stats.idle_agents = stats.total_agents - stats.active_agents;
        stats.agent_utilization = stats.active_agents as f64 / stats.enabled_agents as f64 * 100.0;
        stats
    }

    /// One `name: value` line per counter, in a fixed order.
    pub fn to_log_lines(&self) -> String {
        let fields: [(&str, &dyn std::fmt::Display); 8] = [
            ("totalAgents", &self.total_agents),
            ("activeAgents", &self.active_agents),
            ("idleAgents", &self.idle_agents),
            ("enabledAgents", &self.enabled_agents),
            ("disabledAgents", &self.disabled_agents),
            ("onlineAgents", &self.online_agents),
            ("offlineAgents", &self.offline_agents),
            ("agentUtilization", &self.agent_utilization),
        ];

        let mut output = String::new();
        for (name, value) in fields {
            let _ = writeln!(output, "{name}: {value}");
        }
        output
    }
}
