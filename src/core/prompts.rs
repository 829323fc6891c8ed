// src/core/prompts.rs — Persona system prompt and end-of-chat analysis prompts

use crate::roles::types::fact_or_na;
use crate::roles::{CompanyConfig, ServerConfig};

fn closing_instruction(agent_name: &str) -> String {
    format!("Respond as the {agent_name} agent. Be helpful, upbeat, and professional.")
}

/// Build the persona system prompt sent with the greeting and every turn.
///
/// Sections (in order):
///   1. Agent role
///   2. Company information
///   3. Requirements
///   4. Agent goals
///   5. Key screening questions (+ extra questions from `questions.json`)
pub fn build_system_prompt(
    server: &ServerConfig,
    company: &CompanyConfig,
    questions: &[String],
) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(&server.agent_role);
    prompt.push_str("\n\n");

    append_company_section(&mut prompt, company);
    append_requirements_section(&mut prompt, company);
    append_goals_section(&mut prompt, &server.agent_goals);
    append_questions_section(&mut prompt, company, questions);

    prompt
}

/// System prompt for a turn: the persona prompt plus recent transcript context.
pub fn build_turn_system_prompt(
    server: &ServerConfig,
    company: &CompanyConfig,
    questions: &[String],
    context: &[String],
) -> String {
    let mut prompt = build_system_prompt(server, company, questions);

    prompt.push_str("Conversation so far:\n");
    prompt.push_str(&context.join("\n"));
    prompt.push_str("\n\n");
    prompt.push_str(&closing_instruction(&server.agent_name));
    prompt.push('\n');

    prompt
}

/// User-side wrapper for one applicant message.
pub fn turn_prompt(user_input: &str) -> String {
    format!("User just said: {user_input}\n\nPlease respond appropriately.")
}

pub fn summary_prompt(conversation_text: &str) -> String {
    format!(
        "Please summarize the following conversation in 150 words or less:\n\n\
         {conversation_text}\n\n\
         Focus on key points discussed, driver qualifications, and outcome."
    )
}

pub fn sentiment_prompt(conversation_text: &str) -> String {
    format!(
        "Analyze the sentiment and customer satisfaction of this conversation on a scale of 1-5 \
         (1 = very dissatisfied, 5 = very satisfied):\n\n\
         {conversation_text}\n\n\
         Return only a number from 1 to 5."
    )
}

pub fn decision_prompt(conversation_text: &str) -> String {
    format!(
        "Based on this conversation, did the driver meet the qualifying criteria?\n\
         Consider: Valid CDL, required years of experience, willingness to be on road required nights.\n\n\
         {conversation_text}\n\n\
         Return 'QUALIFIED' or 'NOT_QUALIFIED' followed by a brief reason."
    )
}

// ─── Section builders ───────────────────────────────────────────────────────

fn append_company_section(prompt: &mut String, company: &CompanyConfig) {
    prompt.push_str("Company Information:\n");
    let lines = [
        ("Name", company.name.clone().unwrap_or_else(|| "Unknown".into())),
        ("Role Type", fact_or_na(&company.role_type)),
        ("Industry", fact_or_na(&company.industry)),
        ("Location", fact_or_na(&company.location)),
        ("Wage", format!("${}/hour", fact_or_na(&company.wage))),
        (
            "Expected Miles per Day",
            fact_or_na(&company.expected_miles_per_day),
        ),
        (
            "Work Hours",
            format!(
                "{} - {}",
                fact_or_na(&company.work_start_time),
                fact_or_na(&company.work_end_time)
            ),
        ),
        ("Health Insurance", fact_or_na(&company.health_insurance)),
        ("Dental Insurance", fact_or_na(&company.dental_insurance)),
        ("Vision Insurance", fact_or_na(&company.vision_insurance)),
        ("Retirement Plan", fact_or_na(&company.retirement_plan)),
    ];
    for (label, value) in lines {
        prompt.push_str(&format!("- {label}: {value}\n"));
    }
    prompt.push('\n');
}

fn append_requirements_section(prompt: &mut String, company: &CompanyConfig) {
    prompt.push_str("Requirements:\n");
    prompt.push_str(&format!(
        "- Years of Experience Required: {}\n",
        company.years_required()
    ));
    prompt.push_str(&format!(
        "- Nights per week on road: {}\n",
        company.nights_per_week()
    ));
    prompt.push_str("- Valid, unexpired CDL required\n\n");
}

fn append_goals_section(prompt: &mut String, goals: &[String]) {
    prompt.push_str("Agent Goals:\n");
    for goal in goals {
        prompt.push_str(&format!("- {goal}\n"));
    }
    prompt.push('\n');
}

fn append_questions_section(prompt: &mut String, company: &CompanyConfig, extra: &[String]) {
    let yoe = company.years_required();
    let nights = company.nights_per_week();

    prompt.push_str("Key Screening Questions (work these into the conversation naturally):\n");
    prompt.push_str("1) We need a driver with a valid, unexpired CDL\n");
    prompt.push_str(&format!(
        "2) We need a driver with {yoe} years of experience, do not pass drivers who don't fit this requirement.\n"
    ));
    prompt.push_str(&format!(
        "3) This job requires being on the road for {nights} nights a week. Ask if that is okay?\n"
    ));
    for (i, question) in extra.iter().enumerate() {
        prompt.push_str(&format!("{}) {}\n", i + 4, question));
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{Fact, RoleConfig};

    fn company() -> CompanyConfig {
        CompanyConfig {
            wage: Some(Fact::Number(serde_json::Number::from(28))),
            location: Some(Fact::Text("Reno, NV".into())),
            health_insurance: Some(Fact::Flag(true)),
            ..CompanyConfig::new("Sierra Haul", 3, 5)
        }
    }

    #[test]
    fn test_system_prompt_sections_in_order() {
        let mut roles = RoleConfig::defaults();
        roles.server.agent_goals = vec!["Be upbeat".into(), "Collect CDL status".into()];

        let prompt = build_system_prompt(&roles.server, &company(), &[]);

        let role = prompt.find("You are a trucker screenpass agent.").unwrap();
        let info = prompt.find("Company Information:").unwrap();
        let reqs = prompt.find("Requirements:").unwrap();
        let goals = prompt.find("Agent Goals:").unwrap();
        let questions = prompt.find("Key Screening Questions").unwrap();
        assert!(role < info && info < reqs && reqs < goals && goals < questions);

        assert!(prompt.contains("- Name: Sierra Haul\n"));
        assert!(prompt.contains("- Wage: $28/hour\n"));
        assert!(prompt.contains("- Location: Reno, NV\n"));
        assert!(prompt.contains("- Health Insurance: True\n"));
        assert!(prompt.contains("- Work Hours: N/A - N/A\n"));
        assert!(prompt.contains("- Years of Experience Required: 3\n"));
        assert!(prompt.contains("- Nights per week on road: 5\n"));
        assert!(prompt.contains("- Be upbeat\n- Collect CDL status\n"));
        assert!(prompt.contains("driver with 3 years of experience"));
        assert!(prompt.contains("on the road for 5 nights a week"));
        assert!(!prompt.contains("Conversation so far"));
    }

    #[test]
    fn test_extra_questions_numbered_after_fixed_ones() {
        let roles = RoleConfig::defaults();
        let extra = vec!["Any DUIs in the last 5 years?".to_string()];
        let prompt = build_system_prompt(&roles.server, &company(), &extra);
        assert!(prompt.contains("4) Any DUIs in the last 5 years?\n"));
    }

    #[test]
    fn test_turn_prompt_includes_context_and_closing() {
        let roles = RoleConfig::defaults();
        let context = vec![">Screenpass: Hi".to_string(), ">Trucker: Hello".to_string()];
        let prompt = build_turn_system_prompt(&roles.server, &company(), &[], &context);
        assert!(prompt.contains("Conversation so far:\n>Screenpass: Hi\n>Trucker: Hello\n"));
        assert!(prompt
            .trim_end()
            .ends_with("Respond as the Screenpass agent. Be helpful, upbeat, and professional."));
    }

    #[test]
    fn test_closing_uses_configured_agent_name() {
        let mut roles = RoleConfig::defaults();
        roles.server.agent_name = "Rigby".into();
        let prompt = build_turn_system_prompt(&roles.server, &company(), &[], &[]);
        assert!(prompt.contains("Respond as the Rigby agent."));
        assert!(!prompt.contains("Screenpass agent"));
    }

    #[test]
    fn test_unnamed_company_shows_unknown() {
        let roles = RoleConfig::defaults();
        let prompt = build_system_prompt(&roles.server, &CompanyConfig::default(), &[]);
        assert!(prompt.contains("- Name: Unknown\n"));
        assert!(prompt.contains("- Years of Experience Required: 1\n"));
        assert!(prompt.contains("- Nights per week on road: 4\n"));
    }

    #[test]
    fn test_analysis_prompts_embed_transcript() {
        let text = ">Trucker: I have 6 years";
        assert!(summary_prompt(text).contains(text));
        assert!(sentiment_prompt(text).ends_with("Return only a number from 1 to 5."));
        assert!(decision_prompt(text).contains("'QUALIFIED' or 'NOT_QUALIFIED'"));
        assert_eq!(
            turn_prompt("yes"),
            "User just said: yes\n\nPlease respond appropriately."
        );
    }
}
