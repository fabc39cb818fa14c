//! Prompt templates for recipe generation and improvement.
//!
//! Templates are keyed by the lowercased English name of the output
//! language; languages without a dedicated template fall back to English.

use crate::language::LanguageProfile;

/// System-role persona for generation, per language.
fn generate_system_template(language: &str) -> &'static str {
    match language {
        "french" => {
            "Tu es un assistant de cuisine chaleureux et enthousiaste, le \
             copain de cuisine de l'utilisateur. Garde un ton amical et \
             détendu. Réponds toujours via l'appel de fonction, en \
             remplissant tous les champs texte requis."
        }
        _ => {
            "You are a warm, upbeat cooking companion. Keep the tone \
             friendly and casual. Always answer through the function call, \
             filling in every required text field."
        }
    }
}

/// User-role task template for generation, per language.
fn generate_user_template(language: &str) -> &'static str {
    match language {
        "french" => {
            "Génère une recette de cuisine détaillée au format JSON valide. \
             Utilise des unités {units} pour les quantités. \
             La demande est : {request}"
        }
        _ => {
            "Generate a detailed cooking recipe in valid JSON format. \
             Use {units} units for measurements. \
             The request is: {request}"
        }
    }
}

/// Render the system-role persona instruction for generation.
pub fn render_generate_system_prompt(profile: LanguageProfile) -> String {
    generate_system_template(&profile.name.to_lowercase()).to_string()
}

/// Render the user-role task instruction for generation.
pub fn render_generate_user_prompt(profile: LanguageProfile, request: &str) -> String {
    generate_user_template(&profile.name.to_lowercase())
        .replace("{units}", profile.units)
        .replace("{request}", request)
}

/// System-role instruction for improvement.
pub fn render_improve_system_prompt() -> String {
    "You are a recipe modification assistant. The user will give you a \
     recipe as JSON and an instruction describing the change they want. \
     Apply the change and answer through the function call with the \
     complete modified recipe, keeping the same field set and preserving \
     everything the instruction does not affect."
        .to_string()
}

/// Render the user message for improvement, embedding the serialized
/// original recipe and the requested change.
pub fn render_improve_user_prompt(recipe_json: &str, instruction: &str) -> String {
    format!(
        "Here is the original recipe:\n\n{recipe_json}\n\n\
         The improvement must be: {instruction}\n\n\
         Return exactly the same fields as the original recipe, with the \
         modifications applied."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_prompt_interpolates_units_and_request() {
        let prompt = render_generate_user_prompt(LanguageProfile::ENGLISH, "vegan chili");
        assert!(prompt.contains("imperial units"));
        assert!(prompt.contains("vegan chili"));
    }

    #[test]
    fn french_profile_selects_french_templates() {
        let prompt = render_generate_user_prompt(LanguageProfile::FRENCH, "chili végétalien");
        assert!(prompt.contains("unités metric"));
        assert!(prompt.contains("chili végétalien"));

        let system = render_generate_system_prompt(LanguageProfile::FRENCH);
        assert!(system.contains("copain de cuisine"));
    }

    #[test]
    fn unknown_language_falls_back_to_english_templates() {
        let profile = LanguageProfile::resolve("it");
        let system = render_generate_system_prompt(profile);
        assert!(system.contains("cooking companion"));
    }

    #[test]
    fn improve_prompt_embeds_recipe_and_instruction() {
        let prompt = render_improve_user_prompt(r#"{"title":"Chili"}"#, "make it vegan");
        assert!(prompt.contains(r#"{"title":"Chili"}"#));
        assert!(prompt.contains("make it vegan"));
    }
}
