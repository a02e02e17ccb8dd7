//! Fixed instruction texts sent upstream.

use scamsim_common::TraineeProfile;

/// Counterpart half of the priming pair.
pub const PRIMING_ACK: &str = "Understood. I will start the simulation now.";

/// Hidden instruction that makes the counterpart speak first.
pub const OPENER: &str = "(Start the conversation now, playing your role. Greet the victim.)";

/// Returned by `Session::analyze` whenever the analysis request fails.
pub const ANALYSIS_FALLBACK: &str = "The analysis could not be generated. Connection error.";

/// Scenario persona followed by the trainee framing.
pub fn persona_instruction(
    scenario_prompt: &str,
    profile: &TraineeProfile,
    max_reply_sentences: u32,
) -> String {
    format!(
        "{scenario_prompt}\n\
         The user's name is {name} and they are {age} years old. \
         Adapt your language to their age.\n\
         IMPORTANT: Keep replies short (at most {max_reply_sentences} sentences), \
         like in a real chat.",
        name = profile.name.trim(),
        age = profile.age.trim(),
    )
}

/// Closing critique request for a conversation about `scenario_label`.
pub fn analysis_prompt(scenario_label: &str) -> String {
    format!(
        "Analyze the conversation above. The user was taking part in a scam \
         simulation of type: \"{scenario_label}\".\n\
         \n\
         Give educational feedback in simple HTML (no markdown; use <b>, <ul>, <li>, <p>).\n\
         Structure the answer like this:\n\
         1. <p><b>Verdict:</b> [Did the user fall for it or defend themselves well?]</p>\n\
         2. <p><b>Red Flags:</b></p> <ul>[List of scam signals that appeared]</ul>\n\
         3. <p><b>Security Advice:</b> [Key recommendation to avoid this in real life]</p>\n\
         \n\
         Be direct and educational."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_names_scenario_and_markup() {
        let prompt = analysis_prompt("Fake bank call");
        assert!(prompt.contains("\"Fake bank call\""));
        for tag in ["<p>", "<b>", "<ul>"] {
            assert!(prompt.contains(tag), "missing {tag}");
        }
    }

    #[test]
    fn persona_instruction_frames_trainee() {
        let profile = TraineeProfile {
            name: " Ana ".into(),
            age: "67".into(),
        };
        let text = persona_instruction("You are a scammer.", &profile, 3);
        assert!(text.starts_with("You are a scammer.\n"));
        assert!(text.contains("name is Ana and they are 67 years old"));
        assert!(text.contains("at most 3 sentences"));
    }
}
