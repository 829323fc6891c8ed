// src/roles/types.rs — Agent persona and per-company job facts

use serde::{Deserialize, Serialize};

/// Placeholder credential shipped in the default role files.
pub const PLACEHOLDER_API_KEY: &str = "1234";

const DEFAULT_YOE_REQUIRED: &str = "1";
const DEFAULT_NIGHTS_PER_WEEK: &str = "4";

/// Agent persona, goals, greeting template and LLM credential
/// (`server_config.json`). Missing keys take the built-in persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Speaker name in transcripts and prompts.
    pub agent_name: String,
    pub agent_role: String,
    /// Greeting template; `{}` is replaced with the company name.
    pub initial_prompt: String,
    pub agent_goals: Vec<String>,
    pub api_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            agent_name: "Screenpass".into(),
            agent_role: "You are a trucker screenpass agent.".into(),
            initial_prompt:
                "Hi, I'm Screenpass. I'm here to help you find the perfect trucking job with {}."
                    .into(),
            agent_goals: Vec::new(),
            api_key: PLACEHOLDER_API_KEY.into(),
        }
    }
}

impl ServerConfig {
    /// Render the greeting prompt for a company.
    pub fn greeting_for(&self, company_name: &str) -> String {
        self.initial_prompt
            .replace("{0}", company_name)
            .replace("{}", company_name)
    }
}

/// A single job fact as written in a company file. Any JSON value is
/// accepted; scalars render bare, booleans as `True`/`False`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fact {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl From<u32> for Fact {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(true) => write!(f, "True"),
            Self::Flag(false) => write!(f, "False"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Job requirements and benefits for one employer (`companyA.json`, `companyB.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yoe_required: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_nights_per_week: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wage: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_miles_per_day: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_start_time: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_end_time: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_insurance: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dental_insurance: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_insurance: Option<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement_plan: Option<Fact>,
}

impl CompanyConfig {
    pub fn new(name: &str, yoe_required: u32, work_nights_per_week: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            yoe_required: Some(yoe_required.into()),
            work_nights_per_week: Some(work_nights_per_week.into()),
            ..Self::default()
        }
    }

    /// Required years of experience as written in the file, `1` when absent.
    pub fn years_required(&self) -> String {
        fact_or(&self.yoe_required, DEFAULT_YOE_REQUIRED)
    }

    /// Nights per week on the road as written in the file, `4` when absent.
    pub fn nights_per_week(&self) -> String {
        fact_or(&self.work_nights_per_week, DEFAULT_NIGHTS_PER_WEEK)
    }

    /// Company name, or `fallback` (usually the requested identifier) when unnamed.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// Render an optional fact for a prompt, `N/A` when absent.
pub fn fact_or_na(fact: &Option<Fact>) -> String {
    fact_or(fact, "N/A")
}

fn fact_or(fact: &Option<Fact>, fallback: &str) -> String {
    match fact {
        Some(f) => f.to_string(),
        None => fallback.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_template() {
        let server = ServerConfig {
            agent_name: "Screenpass".into(),
            agent_role: "role".into(),
            initial_prompt: "Hi, jobs with {}.".into(),
            agent_goals: vec![],
            api_key: "1234".into(),
        };
        assert_eq!(server.greeting_for("Acme"), "Hi, jobs with Acme.");
    }

    #[test]
    fn test_greeting_positional_index() {
        let server = ServerConfig {
            agent_name: "Screenpass".into(),
            agent_role: "role".into(),
            initial_prompt: "{0} is hiring. Welcome to {0}!".into(),
            agent_goals: vec![],
            api_key: "1234".into(),
        };
        assert_eq!(
            server.greeting_for("Acme"),
            "Acme is hiring. Welcome to Acme!"
        );
    }

    #[test]
    fn test_server_config_defaults_optional_fields() {
        let json = r#"{"agent_role": "You screen drivers.", "initial_prompt": "Hello {}"}"#;
        let server: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(server.agent_name, "Screenpass");
        assert_eq!(server.api_key, PLACEHOLDER_API_KEY);
        assert!(server.agent_goals.is_empty());
    }

    #[test]
    fn test_server_config_missing_persona_uses_builtin() {
        let server: ServerConfig =
            serde_json::from_str(r#"{"api_key": "sk-live-abcdefghijk"}"#).unwrap();
        assert_eq!(server.agent_role, ServerConfig::default().agent_role);
        assert_eq!(server.initial_prompt, ServerConfig::default().initial_prompt);
        assert_eq!(server.api_key, "sk-live-abcdefghijk");
    }

    #[test]
    fn test_company_mixed_fact_types() {
        let json = r#"{
            "name": "Big Rig Co",
            "yoe_required": 2,
            "work_nights_per_week": 3,
            "wage": 31.5,
            "location": "Dallas, TX",
            "health_insurance": true,
            "dental_insurance": false,
            "retirement_plan": "401k with match"
        }"#;
        let company: CompanyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(company.years_required(), "2");
        assert_eq!(company.nights_per_week(), "3");
        assert_eq!(fact_or_na(&company.wage), "31.5");
        assert_eq!(fact_or_na(&company.location), "Dallas, TX");
        assert_eq!(fact_or_na(&company.health_insurance), "True");
        assert_eq!(fact_or_na(&company.dental_insurance), "False");
        assert_eq!(fact_or_na(&company.retirement_plan), "401k with match");
        assert_eq!(fact_or_na(&company.vision_insurance), "N/A");
    }

    #[test]
    fn test_company_requirement_defaults() {
        let company = CompanyConfig::default();
        assert_eq!(company.years_required(), "1");
        assert_eq!(company.nights_per_week(), "4");
        assert_eq!(company.display_name("companyX"), "companyX");
    }

    #[test]
    fn test_requirements_accept_any_json_type() {
        let json = r#"{
            "yoe_required": "3",
            "work_nights_per_week": 2.5,
            "location": ["Reno", "Sparks"],
            "wage": null
        }"#;
        let company: CompanyConfig = serde_json::from_str(json).unwrap();
        assert_eq!(company.years_required(), "3");
        assert_eq!(company.nights_per_week(), "2.5");
        assert_eq!(fact_or_na(&company.location), r#"["Reno","Sparks"]"#);
        assert_eq!(fact_or_na(&company.wage), "N/A");
    }
}
