//! Instruments declared as JSON documents rather than compiled in.
//!
//! A declaration lists prompts in order; question indices are assigned from
//! position. Declarations are parsed here and validated when they enter a
//! [`Registry`](crate::Registry), like any built-in.

use std::path::Path;

use serde::Deserialize;

use crate::error::InstrumentError;
use crate::scoring::{questions_from_prompts, AnswerOption, Question, ThresholdRule};
use crate::Instrument;

#[derive(Debug, Clone, Deserialize)]
#[serde(from = "DeclaredInstrument")]
pub struct InstrumentDefinition {
    pub id: String,
    pub name: String,
    pub instructions: Option<String>,
    pub questions: Vec<Question>,
    pub answer_domain: Vec<AnswerOption>,
    pub thresholds: Vec<ThresholdRule>,
}

/// On-disk shape of a declared instrument.
#[derive(Deserialize)]
struct DeclaredInstrument {
    id: String,
    name: String,
    #[serde(default)]
    instructions: Option<String>,
    questions: Vec<String>,
    answer_domain: Vec<AnswerOption>,
    thresholds: Vec<ThresholdRule>,
}

impl From<DeclaredInstrument> for InstrumentDefinition {
    fn from(declared: DeclaredInstrument) -> Self {
        Self {
            id: declared.id,
            name: declared.name,
            instructions: declared.instructions,
            questions: questions_from_prompts(declared.questions),
            answer_domain: declared.answer_domain,
            thresholds: declared.thresholds,
        }
    }
}

impl InstrumentDefinition {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a single declaration from a file.
    pub fn load(path: &Path) -> Result<Self, InstrumentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| InstrumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| InstrumentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load every `*.json` declaration in `dir`, in file-name order.
pub fn load_dir(dir: &Path) -> Result<Vec<InstrumentDefinition>, InstrumentError> {
    let io_error = |source: std::io::Error| InstrumentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut definitions = Vec::with_capacity(paths.len());
    for path in &paths {
        let definition = InstrumentDefinition::load(path)?;
        tracing::info!(
            instrument = %definition.id,
            path = %path.display(),
            "loaded declared instrument"
        );
        definitions.push(definition);
    }
    Ok(definitions)
}

impl Instrument for InstrumentDefinition {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn answer_domain(&self) -> &[AnswerOption] {
        &self.answer_domain
    }

    fn thresholds(&self) -> &[ThresholdRule] {
        &self.thresholds
    }
}
