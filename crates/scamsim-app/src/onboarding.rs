//! First-run prompts: API key and trainee profile.

use std::io::Write;

use scamsim_common::{ScamsimError, TraineeProfile};
use scamsim_config::CredentialStore;
use tokio::io::AsyncBufRead;
use tracing::warn;

use crate::console::Console;

/// The key from the environment or the store, else ask for one and store it.
pub async fn obtain_api_key<R, W>(
    console: &mut Console<R, W>,
    store: &CredentialStore,
) -> Result<String, ScamsimError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(key) = store.resolve()? {
        return Ok(key);
    }

    console.say("A Google Gemini API key is needed to run the simulations.")?;
    console.say("Get one at https://aistudio.google.com/app/apikey")?;
    loop {
        let Some(line) = console.prompt("API key: ").await? else {
            return Err(ScamsimError::MissingCredential(
                "no API key entered".into(),
            ));
        };
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if let Err(e) = store.save(key) {
            warn!("could not persist API key: {e}");
            console.say("(The key could not be saved; it will be asked again next time.)")?;
        }
        return Ok(key.to_string());
    }
}

/// Ask for name and age until both are given. `None` at end of input.
pub async fn ask_profile<R, W>(
    console: &mut Console<R, W>,
) -> Result<Option<TraineeProfile>, ScamsimError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let Some(name) = console.prompt("Your name: ").await? else {
            return Ok(None);
        };
        let Some(age) = console.prompt("Your age: ").await? else {
            return Ok(None);
        };

        let profile = TraineeProfile {
            name: name.trim().to_string(),
            age: age.trim().to_string(),
        };
        if profile.is_complete() {
            return Ok(Some(profile));
        }
        console.say("Please enter both your name and your age.")?;
    }
}
