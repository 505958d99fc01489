//! Template identifiers and placeholder substitution.
//!
//! The set of templates is closed: [`TemplateId`] maps each variant to a fixed
//! file name, so no path is ever built from caller input. Substitution is a
//! literal, single left-to-right pass over the template text. Values inserted
//! for one placeholder are never rescanned for another.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token replaced with the command name.
pub const COMMAND_NAME_TOKEN: &str = "{command_name}";
/// Token replaced with the command description.
pub const DESCRIPTION_TOKEN: &str = "{description}";

/// Identifier of one of the two bundled command templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateId {
    /// Non-interactive command template
    #[serde(rename = "command-basic")]
    Basic,
    /// Command template with interactive input handling
    #[serde(rename = "command-interactive")]
    Interactive,
}

impl TemplateId {
    /// Every known template, in selection order.
    pub const ALL: [TemplateId; 2] = [TemplateId::Basic, TemplateId::Interactive];

    /// Selects the template for the given interactivity flag.
    pub fn for_mode(interactive: bool) -> Self {
        if interactive {
            Self::Interactive
        } else {
            Self::Basic
        }
    }

    /// Identifier as used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "command-basic",
            Self::Interactive => "command-interactive",
        }
    }

    /// File name of the template inside the template directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Basic => "command-basic.txt",
            Self::Interactive => "command-interactive.txt",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values substituted into a command template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders<'a> {
    pub command_name: &'a str,
    pub description: &'a str,
}

impl<'a> Placeholders<'a> {
    pub fn new(command_name: &'a str, description: &'a str) -> Self {
        Self {
            command_name,
            description,
        }
    }

    /// Replaces every placeholder token in `template` with its value.
    ///
    /// Text that merely looks like a token, such as `{other}` or an unclosed
    /// `{`, is copied through unchanged.
    pub fn apply(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find('{') {
            output.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match self.match_token(tail) {
                Some((token_len, value)) => {
                    output.push_str(value);
                    rest = &tail[token_len..];
                }
                None => {
                    output.push('{');
                    rest = &tail[1..];
                }
            }
        }

        output.push_str(rest);
        output
    }

    fn match_token(&self, text: &str) -> Option<(usize, &'a str)> {
        [
            (COMMAND_NAME_TOKEN, self.command_name),
            (DESCRIPTION_TOKEN, self.description),
        ]
        .into_iter()
        .find(|(token, _)| text.starts_with(token))
        .map(|(token, value)| (token.len(), value))
    }
}
