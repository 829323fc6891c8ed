// src/core/orchestrator.rs — Initialize / turn / summarize handlers

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::analysis::{parse_decision, parse_sentiment};
use super::prompts;
use super::types::{
    default_company, default_lead_source, InitResponse, SummaryResponse, TurnResponse,
};
use crate::infra::config::Config;
use crate::infra::errors::ScreenpassError;
use crate::persistence::{timestamp_tag, ConversationMeta, DecisionRow, ResultsWriter, SentimentRow};
use crate::provider::LlmClient;
use crate::roles::RoleConfig;
use crate::session::{ConversationSession, SessionStore};

/// Everything the client sends when the applicant ends the chat. Doubles as
/// the summarize request body; timestamps are ISO-8601 local date-times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeInput {
    #[serde(default, alias = "conversationHistory")]
    pub conversation_history: Vec<String>,
    #[serde(alias = "startTime")]
    pub start_time: NaiveDateTime,
    #[serde(alias = "endTime")]
    pub end_time: NaiveDateTime,
    #[serde(default = "default_lead_source", alias = "leadSource")]
    pub lead_source: String,
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(alias = "sessionId")]
    pub session_id: String,
}

/// Drives one applicant conversation from greeting to analysis.
///
/// Handlers never return `Err`: every failure becomes a `success: false`
/// response so the chat can carry on.
pub struct Orchestrator {
    roles: Arc<RoleConfig>,
    llm: LlmClient,
    sessions: Arc<dyn SessionStore>,
    writer: ResultsWriter,
    /// Trailing transcript lines included in each turn's system prompt.
    context_lines: usize,
}

impl Orchestrator {
    pub fn new(
        roles: Arc<RoleConfig>,
        llm: LlmClient,
        sessions: Arc<dyn SessionStore>,
        writer: ResultsWriter,
        context_lines: usize,
    ) -> Self {
        Self {
            roles,
            llm,
            sessions,
            writer,
            context_lines,
        }
    }

    /// Wire up role files, LLM client and results writer from the app config.
    pub fn from_config(config: &Config, sessions: Arc<dyn SessionStore>) -> Self {
        let roles = RoleConfig::load(&config.paths.roles_dir);
        let llm = LlmClient::from_settings(&roles.server.api_key, &config.llm);
        Self::new(
            Arc::new(roles),
            llm,
            sessions,
            ResultsWriter::new(&config.paths.results_dir),
            config.llm.context_lines,
        )
    }

    pub fn roles(&self) -> &RoleConfig {
        &self.roles
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    pub fn writer(&self) -> &ResultsWriter {
        &self.writer
    }

    /// Start a session and return the company-specific greeting.
    pub async fn initialize(
        &self,
        lead_source: &str,
        company: &str,
        session_id: &str,
    ) -> InitResponse {
        tracing::info!(company, lead_source, session_id, "Initializing conversation");
        match self.try_initialize(lead_source, company, session_id).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(session_id, "Error in initialize: {}", e);
                InitResponse::failed(e)
            }
        }
    }

    async fn try_initialize(
        &self,
        lead_source: &str,
        company: &str,
        session_id: &str,
    ) -> Result<InitResponse, ScreenpassError> {
        let company_config = self.roles.company(company).clone();
        let greeting_prompt = self
            .roles
            .server
            .greeting_for(company_config.display_name(company));
        let system_prompt = prompts::build_system_prompt(
            &self.roles.server,
            &company_config,
            &self.roles.questions,
        );

        self.sessions.put(ConversationSession::new(
            session_id,
            lead_source,
            company,
            company_config.clone(),
            Local::now().naive_local(),
        ))?;

        let message = self.llm.complete(&greeting_prompt, &system_prompt).await;
        Ok(InitResponse::ok(message, company_config))
    }

    /// Answer one applicant message.
    ///
    /// The stored history is replaced by `conversation_history` as sent by
    /// the client; the server does not append on its own.
    pub async fn process_turn(
        &self,
        user_input: &str,
        conversation_history: Vec<String>,
        session_id: &str,
    ) -> TurnResponse {
        tracing::info!(
            session_id,
            "Processing user input: {}",
            crate::util::truncate_str(user_input, 50)
        );
        match self
            .try_process_turn(user_input, conversation_history, session_id)
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(session_id, "Error in process_turn: {}", e);
                TurnResponse::failed(e)
            }
        }
    }

    async fn try_process_turn(
        &self,
        user_input: &str,
        conversation_history: Vec<String>,
        session_id: &str,
    ) -> Result<TurnResponse, ScreenpassError> {
        let Some(mut session) = self.sessions.get(session_id)? else {
            tracing::warn!(session_id, "Turn for unknown session");
            return Ok(TurnResponse::session_not_found());
        };

        session.history = conversation_history;

        let company_config = match &session.company_config {
            Some(c) => c.clone(),
            None => self.roles.company(&session.company).clone(),
        };
        let start = session.history.len().saturating_sub(self.context_lines);
        let system_prompt = prompts::build_turn_system_prompt(
            &self.roles.server,
            &company_config,
            &self.roles.questions,
            &session.history[start..],
        );
        let prompt = prompts::turn_prompt(user_input);

        self.sessions.put(session)?;

        let message = self.llm.complete(&prompt, &system_prompt).await;
        Ok(TurnResponse::ok(message))
    }

    /// End the conversation: write transcript and summary, append the
    /// sentiment and decision rows, and drop the session.
    ///
    /// Succeeds for unknown or already-ended sessions using only `input`.
    /// Writes are not transactional: a failure part-way leaves earlier files
    /// in place.
    pub async fn summarize(&self, input: SummarizeInput) -> SummaryResponse {
        tracing::info!(
            session_id = %input.session_id,
            company = %input.company,
            lead_source = %input.lead_source,
            "Summarizing conversation"
        );
        match self.try_summarize(&input).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(session_id = %input.session_id, "Error in summarize: {}", e);
                SummaryResponse::failed(e)
            }
        }
    }

    async fn try_summarize(
        &self,
        input: &SummarizeInput,
    ) -> Result<SummaryResponse, ScreenpassError> {
        let session = match self.sessions.get(&input.session_id)? {
            Some(s) => s,
            None => {
                tracing::info!(
                    session_id = %input.session_id,
                    "No active session, using request data"
                );
                ConversationSession::synthesized(
                    &input.session_id,
                    &input.lead_source,
                    &input.company,
                    input.start_time,
                )
            }
        };
        tracing::debug!(
            session_id = %session.id,
            stored_lines = session.history.len(),
            received_lines = input.conversation_history.len(),
            "Session state at summarize"
        );

        self.writer.ensure_dirs()?;

        let tag = timestamp_tag(&input.start_time, &input.end_time);
        let meta = ConversationMeta {
            start_time: &input.start_time,
            end_time: &input.end_time,
            lead_source: &input.lead_source,
            company: &input.company,
        };

        // 1. Transcript
        let audit_path = self
            .writer
            .write_transcript(&tag, &meta, &input.conversation_history)?;
        tracing::info!("Saved conversation audit to {}", audit_path.display());

        // 2-4. Independent analysis calls, joined before any further write
        let conversation_text = input.conversation_history.join("\n");
        let summary_prompt = prompts::summary_prompt(&conversation_text);
        let sentiment_prompt = prompts::sentiment_prompt(&conversation_text);
        let decision_prompt = prompts::decision_prompt(&conversation_text);
        let (summary, sentiment_reply, decision_reply) = tokio::join!(
            self.llm.complete(&summary_prompt, ""),
            self.llm.complete(&sentiment_prompt, ""),
            self.llm.complete(&decision_prompt, ""),
        );

        let summary_path =
            self.writer
                .write_summary(&tag, &meta, &Local::now().naive_local(), &summary)?;
        tracing::info!("Saved summary to {}", summary_path.display());

        let sentiment_score = parse_sentiment(&sentiment_reply);
        self.writer.append_sentiment(&SentimentRow {
            recorded_at: Local::now().naive_local(),
            company: &input.company,
            lead_source: &input.lead_source,
            score: sentiment_score,
            conversation: format!("conversation_{tag}"),
        })?;
        tracing::info!(score = sentiment_score, "Appended sentiment row");

        let decision = parse_decision(&decision_reply);
        self.writer.append_decision(&DecisionRow {
            recorded_at: Local::now().naive_local(),
            company: &input.company,
            lead_source: &input.lead_source,
            qualified: decision.qualified,
            reason: &decision.reason,
        })?;
        tracing::info!(qualified = decision.qualified, "Appended decision row");

        self.sessions.delete(&input.session_id)?;

        Ok(SummaryResponse::ok(
            summary,
            sentiment_score,
            decision.qualified,
        ))
    }
}
