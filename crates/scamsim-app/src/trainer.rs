//! Screen flow: scenario list, chat, feedback.

use std::io::Write;
use std::sync::Arc;

use scamsim_ai::prompts::persona_instruction;
use scamsim_ai::{AiClient, ModelResolver, Session};
use scamsim_common::{Scenario, ScamsimError, TraineeProfile};
use scamsim_config::ScamsimConfig;
use tokio::io::AsyncBufRead;
use tracing::info;

use crate::console::Console;
use crate::feedback;

const COUNTERPART_NAME: &str = "Them";

/// How a chat screen was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChatExit {
    Back,
    Analyzed,
    Quit,
}

pub struct Trainer {
    client: Arc<dyn AiClient>,
    config: ScamsimConfig,
    scenarios: Vec<Scenario>,
    profile: TraineeProfile,
    ansi: bool,
}

impl Trainer {
    pub fn new(
        client: Arc<dyn AiClient>,
        config: ScamsimConfig,
        scenarios: Vec<Scenario>,
        profile: TraineeProfile,
    ) -> Self {
        Self {
            client,
            config,
            scenarios,
            profile,
            ansi: false,
        }
    }

    /// Use ANSI bold in the feedback screen.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Run until the trainee quits or input ends.
    pub async fn run<R, W>(&self, console: &mut Console<R, W>) -> Result<(), ScamsimError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        loop {
            self.show_scenarios(console)?;
            let Some(choice) = console
                .prompt("Pick a scenario (number or id, q to quit): ")
                .await?
            else {
                return Ok(());
            };
            let choice = choice.trim();
            if choice.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            let Some(scenario) = self.find_scenario(choice) else {
                if !choice.is_empty() {
                    console.say(&format!("No scenario matches '{choice}'."))?;
                }
                continue;
            };

            match self.chat(console, scenario).await? {
                ChatExit::Quit => return Ok(()),
                ChatExit::Analyzed => {
                    if console.prompt("Press Enter to pick another scenario.").await?.is_none() {
                        return Ok(());
                    }
                }
                ChatExit::Back => {}
            }
        }
    }

    fn show_scenarios<R, W>(&self, console: &mut Console<R, W>) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        console.blank()?;
        console.say(&format!("Hi {}, choose a scenario to practice:", self.profile.name))?;
        for (i, s) in self.scenarios.iter().enumerate() {
            console.say(&format!("{}. {} [{}]", i + 1, s.title, s.difficulty))?;
            if !s.description.is_empty() {
                console.say(&format!("   {}", s.description))?;
            }
        }
        console.blank()
    }

    fn find_scenario(&self, choice: &str) -> Option<&Scenario> {
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.scenarios.get(i));
        }
        self.scenarios.iter().find(|s| s.id == choice)
    }

    fn new_session(&self, scenario: &Scenario) -> Session {
        let api = &self.config.api;
        let system_prompt = persona_instruction(
            &scenario.system_prompt,
            &self.profile,
            self.config.chat.max_reply_sentences,
        );
        Session::new(
            self.client.clone(),
            ModelResolver::new(&api.preferred_models, api.default_model.clone()),
            system_prompt,
            scenario.title.clone(),
        )
    }

    async fn chat<R, W>(
        &self,
        console: &mut Console<R, W>,
        scenario: &Scenario,
    ) -> Result<ChatExit, ScamsimError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let session = self.new_session(scenario);
        info!(session = %session.id(), scenario = %scenario.id, "scenario started");

        console.blank()?;
        console.say(&format!("== {} ==", scenario.title))?;
        console.say("Commands: /analyze to finish and get feedback, /back for the list, /quit to exit.")?;
        console.blank()?;

        if self.config.chat.open_with_greeting {
            let opening = session.open().await;
            show_reply(console, opening)?;
        }

        loop {
            let Some(line) = console.prompt("You: ").await? else {
                return Ok(ChatExit::Quit);
            };
            let text = line.trim();
            match text {
                "" => continue,
                "/quit" => return Ok(ChatExit::Quit),
                "/back" => return Ok(ChatExit::Back),
                "/analyze" => {
                    console.say("Analyzing...")?;
                    let critique = session.analyze().await;
                    console.blank()?;
                    console.say("== Feedback ==")?;
                    console.say(&feedback::to_terminal(&critique, self.ansi))?;
                    console.blank()?;
                    return Ok(ChatExit::Analyzed);
                }
                _ => {
                    let reply = session.send_turn(text).await;
                    show_reply(console, reply)?;
                }
            }
        }
    }
}

fn show_reply<R, W>(
    console: &mut Console<R, W>,
    reply: Result<String, scamsim_ai::AiError>,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match reply {
        Ok(text) => console.counterpart(COUNTERPART_NAME, &text),
        Err(e) => console.counterpart(COUNTERPART_NAME, &format!("Error: {e}")),
    }
}
