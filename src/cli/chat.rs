// src/cli/chat.rs — Terminal chat driver
//
// Plays the widget's role against the orchestrator: keeps the transcript
// client-side, resends it in full every turn, summarizes exactly once.

use chrono::{DateTime, Local};

use crate::core::types::TURN_ERROR_MESSAGE;
use crate::core::{Orchestrator, SummarizeInput};
use crate::session::transcript_line;
use crate::util::truncate_chars;

pub const APPLICANT_SPEAKER: &str = "Trucker";

/// Longest message accepted from the applicant.
pub const MAX_INPUT_CHARS: usize = 1000;

const END_COMMAND: &str = "/end";

/// Session id derived from the chat start time (`<unix secs>.<micros>`).
pub fn session_id_for(start: &DateTime<Local>) -> String {
    format!("{}.{:06}", start.timestamp(), start.timestamp_subsec_micros())
}

/// Trim and cap an applicant message; `None` when there is nothing to send.
pub fn prepare_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(truncate_chars(trimmed, MAX_INPUT_CHARS).to_string())
}

/// Run the interactive chat until `/end` or EOF.
pub async fn run_chat(
    orchestrator: &Orchestrator,
    lead_source: &str,
    company: &str,
    skip_confirm: bool,
) -> anyhow::Result<()> {
    let started = Local::now();
    let session_id = session_id_for(&started);
    let mut history: Vec<String> = Vec::new();
    let agent = orchestrator.roles().server.agent_name.as_str();

    eprintln!(
        "screenpass v{} | company: {} | lead source: {} | type {} to finish\n",
        env!("CARGO_PKG_VERSION"),
        company,
        lead_source,
        END_COMMAND,
    );

    let init = orchestrator
        .initialize(lead_source, company, &session_id)
        .await;
    if !init.success {
        eprintln!("(connection issue, but chat is ready)");
    }
    say(&mut history, agent, &init.message);

    loop {
        let Some(line) = read_input() else {
            break;
        };

        if line.trim() == END_COMMAND {
            if skip_confirm || confirm_end() {
                break;
            }
            continue;
        }

        let Some(text) = prepare_input(&line) else {
            continue;
        };

        history.push(transcript_line(APPLICANT_SPEAKER, &text));
        let turn = orchestrator
            .process_turn(&text, history.clone(), &session_id)
            .await;
        let reply = if turn.success {
            turn.message
        } else {
            TURN_ERROR_MESSAGE.to_string()
        };
        say(&mut history, agent, &reply);
    }

    let summary = orchestrator
        .summarize(SummarizeInput {
            conversation_history: history.clone(),
            start_time: started.naive_local(),
            end_time: Local::now().naive_local(),
            lead_source: lead_source.to_string(),
            company: company.to_string(),
            session_id,
        })
        .await;

    if summary.success {
        say(
            &mut history,
            agent,
            "Thank you for your time! The conversation has been saved and analyzed.",
        );
        eprintln!(
            "sentiment: {} | qualified: {}",
            summary.sentiment_score.unwrap_or_default(),
            summary.qualified.unwrap_or_default()
        );
    } else {
        say(
            &mut history,
            agent,
            "Chat ended, but there was an error saving the summary.",
        );
    }

    Ok(())
}

fn say(history: &mut Vec<String>, speaker: &str, message: &str) {
    let line = transcript_line(speaker, message);
    println!("{line}\n");
    history.push(line);
}

fn confirm_end() -> bool {
    inquire::Confirm::new(
        "Are you sure you want to end this chat? This will save and analyze the conversation.",
    )
    .with_default(true)
    .prompt()
    .unwrap_or(true)
}

fn read_input() -> Option<String> {
    use std::io::{self, BufRead, Write};

    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prepare_input() {
        assert_eq!(prepare_input("  hi there \n"), Some("hi there".into()));
        assert_eq!(prepare_input("   \n"), None);

        let long = "a".repeat(1500);
        assert_eq!(prepare_input(&long).unwrap().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_session_id_for() {
        let t = Local.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
        assert_eq!(session_id_for(&t), "1700000000.123456");
    }
}
