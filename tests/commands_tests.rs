use serde_json::json;

use imagine::core::commands::{
    AiParams, COMMANDS, ImageRatio, ImagineParams, find_command, registration_payload,
};
use imagine::core::models::{CommandOption, InteractionData};

fn data_with(options: Vec<(&str, serde_json::Value)>) -> InteractionData {
    InteractionData {
        name: "imagine".to_string(),
        options: options
            .into_iter()
            .map(|(name, value)| CommandOption {
                name: name.to_string(),
                value,
            })
            .collect(),
    }
}

#[test]
fn test_command_lookup_is_case_insensitive() {
    assert_eq!(find_command("ai").unwrap().name, "ai");
    assert_eq!(find_command("AI").unwrap().name, "ai");
    assert_eq!(find_command("Imagine").unwrap().name, "imagine");
    assert!(find_command("unknown").is_none());
}

#[test]
fn test_registration_payload_shape() {
    let payload = registration_payload();
    let commands = payload.as_array().expect("payload should be an array");
    assert_eq!(commands.len(), COMMANDS.len());

    // `ai`: one required string option.
    assert_eq!(commands[0]["name"], "ai");
    assert_eq!(commands[0]["options"][0]["name"], "prompt");
    assert_eq!(commands[0]["options"][0]["type"], 3);
    assert_eq!(commands[0]["options"][0]["required"], true);

    // `imagine`: required prompt, enumerated ratio, two optional booleans.
    assert_eq!(commands[1]["name"], "imagine");
    let options = commands[1]["options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(options[1]["name"], "ratio");
    assert_eq!(options[1]["choices"].as_array().unwrap().len(), 3);
    assert_eq!(options[1]["choices"][1]["value"], "wide");
    assert_eq!(options[2]["type"], 5);
    assert_eq!(options[2]["required"], false);
    assert_eq!(options[3]["name"], "hd");
}

#[test]
fn test_ai_params_default_prompt() {
    let data = InteractionData {
        name: "ai".to_string(),
        options: vec![],
    };
    assert_eq!(AiParams::from_data(&data).prompt, "Hello!");
}

#[test]
fn test_ai_params_reads_prompt_option() {
    let data = data_with(vec![("prompt", json!("What is Rust?"))]);
    assert_eq!(AiParams::from_data(&data).prompt, "What is Rust?");
}

#[test]
fn test_imagine_params_defaults() {
    let data = data_with(vec![("prompt", json!("a cat"))]);
    let params = ImagineParams::from_data(&data);
    assert_eq!(params.prompt, "a cat");
    assert_eq!(params.ratio, ImageRatio::Square);
    assert!(params.revise);
    assert!(params.hd);
    assert_eq!(params.quality(), "hd");
}

#[test]
fn test_imagine_params_explicit_options() {
    let data = data_with(vec![
        ("prompt", json!("a dog")),
        ("ratio", json!("tall")),
        ("revise", json!(false)),
        ("hd", json!(false)),
    ]);
    let params = ImagineParams::from_data(&data);
    assert_eq!(params.ratio, ImageRatio::Tall);
    assert!(!params.revise);
    assert!(!params.hd);
    assert_eq!(params.quality(), "standard");
}

#[test]
fn test_ratio_size_mapping() {
    assert_eq!(ImageRatio::Square.size(), "1024x1024");
    assert_eq!(ImageRatio::Wide.size(), "1792x1024");
    assert_eq!(ImageRatio::Tall.size(), "1024x1792");
}

#[test]
fn test_unknown_ratio_falls_back_to_square() {
    assert_eq!(ImageRatio::parse("panoramic"), ImageRatio::Square);
    assert_eq!(ImageRatio::parse("wide"), ImageRatio::Wide);
}
