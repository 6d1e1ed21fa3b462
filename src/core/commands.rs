//! Static command descriptor table.
//!
//! Declared once, used both for the offline PUT registration and for
//! dispatcher lookup, plus the typed parameter structs each handler
//! receives after option extraction.

use serde_json::{Value, json};

use crate::core::models::InteractionData;

/// Discord application command option type `3` (string).
const OPTION_TYPE_STRING: u8 = 3;
/// Discord application command option type `5` (boolean).
const OPTION_TYPE_BOOLEAN: u8 = 5;

#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionDescriptor],
}

#[derive(Debug, Clone, Copy)]
pub struct OptionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: u8,
    pub required: bool,
    pub choices: &'static [(&'static str, &'static str)],
}

pub const AI_COMMAND: CommandDescriptor = CommandDescriptor {
    name: "ai",
    description: "Send a message to ChatGPT",
    options: &[OptionDescriptor {
        name: "prompt",
        description: "The message to send to ChatGPT",
        kind: OPTION_TYPE_STRING,
        required: true,
        choices: &[],
    }],
};

pub const IMAGINE_COMMAND: CommandDescriptor = CommandDescriptor {
    name: "imagine",
    description: "Generate an image with DALL-E",
    options: &[
        OptionDescriptor {
            name: "prompt",
            description: "The prompt for DALL-E",
            kind: OPTION_TYPE_STRING,
            required: true,
            choices: &[],
        },
        OptionDescriptor {
            name: "ratio",
            description: "Image ratio (default: square)",
            kind: OPTION_TYPE_STRING,
            required: false,
            choices: &[("Square", "square"), ("Wide", "wide"), ("Tall", "tall")],
        },
        OptionDescriptor {
            name: "revise",
            description: "Allow DALL-E to automatically revise your prompt (default: true)",
            kind: OPTION_TYPE_BOOLEAN,
            required: false,
            choices: &[],
        },
        OptionDescriptor {
            name: "hd",
            description: "Generate image in HD quality (default: true)",
            kind: OPTION_TYPE_BOOLEAN,
            required: false,
            choices: &[],
        },
    ],
};

pub const COMMANDS: &[CommandDescriptor] = &[AI_COMMAND, IMAGINE_COMMAND];

/// Case-insensitive lookup over the static table.
pub fn find_command(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// The JSON array the applications/commands PUT endpoint expects.
pub fn registration_payload() -> Value {
    Value::Array(COMMANDS.iter().map(descriptor_json).collect())
}

fn descriptor_json(command: &CommandDescriptor) -> Value {
    let options: Vec<Value> = command
        .options
        .iter()
        .map(|opt| {
            let mut v = json!({
                "name": opt.name,
                "description": opt.description,
                "type": opt.kind,
                "required": opt.required,
            });
            if !opt.choices.is_empty() {
                let choices: Vec<Value> = opt
                    .choices
                    .iter()
                    .map(|(name, value)| json!({ "name": name, "value": value }))
                    .collect();
                v["choices"] = Value::Array(choices);
            }
            v
        })
        .collect();

    json!({
        "name": command.name,
        "description": command.description,
        "options": options,
    })
}

// ============================================================================
// Typed command parameters
// ============================================================================

/// Parameters for `/ai`, extracted once at the dispatcher boundary.
#[derive(Debug, Clone)]
pub struct AiParams {
    pub prompt: String,
}

impl AiParams {
    /// The `prompt` option is registered as required, so the default only
    /// covers malformed payloads.
    pub fn from_data(data: &InteractionData) -> Self {
        Self {
            prompt: data.option_str("prompt").unwrap_or("Hello!").to_string(),
        }
    }
}

/// Parameters for `/imagine`, with the documented defaults applied.
#[derive(Debug, Clone)]
pub struct ImagineParams {
    pub prompt: String,
    pub ratio: ImageRatio,
    pub revise: bool,
    pub hd: bool,
}

impl ImagineParams {
    pub fn from_data(data: &InteractionData) -> Self {
        Self {
            prompt: data
                .option_str("prompt")
                .unwrap_or("A photograph of a cat.")
                .to_string(),
            ratio: ImageRatio::parse(data.option_str("ratio").unwrap_or("square")),
            revise: data.option_bool("revise").unwrap_or(true),
            hd: data.option_bool("hd").unwrap_or(true),
        }
    }

    /// DALL-E quality parameter derived from the `hd` flag.
    pub fn quality(&self) -> &'static str {
        if self.hd { "hd" } else { "standard" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRatio {
    Square,
    Wide,
    Tall,
}

impl ImageRatio {
    /// Unknown values fall back to `Square`, matching the registered default.
    pub fn parse(value: &str) -> Self {
        match value {
            "wide" => ImageRatio::Wide,
            "tall" => ImageRatio::Tall,
            _ => ImageRatio::Square,
        }
    }

    pub fn size(self) -> &'static str {
        match self {
            ImageRatio::Square => "1024x1024",
            ImageRatio::Wide => "1792x1024",
            ImageRatio::Tall => "1024x1792",
        }
    }
}
