pub mod catalog;
mod form;
pub mod fsm;
pub mod parser;
pub mod prompt;

pub use catalog::{ModelChoice, Register};
pub use form::{FormFields, FormSnapshot, SubmitRejection, TranslationForm};
pub use fsm::{FormEvent, FormPhase, FormStateMachine, TranslationResult};
pub use parser::{ParseError, ParseStrategy, Translation, parse_translation_response};
pub use prompt::build_prompt;
