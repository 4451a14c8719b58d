use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::ProcessError;

/// Marker every quiz sentence must contain at the blank position.
pub const PLACEHOLDER_MARKER: &str = "<!-(problem area)-!>";

/// Prompt text injected into every item. The key it lands under, "quesion",
/// is misspelled in the app's wire format and must stay spelled that way.
pub const FIXED_PROMPT: &str = "다음 빈칸에 알맞는 답을 고르세요.";

/// Quiz type injected into every item.
pub const QUIZ_TYPE: &str = "type1";

/// Counts reported after a successful normalization pass
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeSummary {
    pub categories: usize,
    pub items: usize,
}

/// Renumbers category and item ids, validates every item, and injects the
/// fixed prompt fields, entirely in memory. Unknown fields at every level are
/// left untouched.
pub fn normalize(doc: &mut Value) -> Result<NormalizeSummary, ProcessError> {
    let root = doc.as_object_mut().ok_or_else(|| {
        ProcessError::Validation("document root is not a JSON object".to_string())
    })?;

    let categories = root
        .get_mut("categories")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            ProcessError::Validation("categories key is missing or not an array".to_string())
        })?;

    let category_count = categories.len();
    let mut item_count = 0;

    for (idx, category) in categories.iter_mut().enumerate() {
        let category = category.as_object_mut().ok_or_else(|| {
            ProcessError::Validation(format!("category {} is not an object", idx + 1))
        })?;

        category.insert("id".to_string(), Value::String((idx + 1).to_string()));

        let items = category
            .get_mut("data")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| {
                ProcessError::Validation(format!(
                    "data key is missing or not an array in category {}",
                    idx + 1
                ))
            })?;

        for (item_idx, item) in items.iter_mut().enumerate() {
            let item = item.as_object_mut().ok_or_else(|| {
                ProcessError::Validation(format!(
                    "item {} in category {} is not an object",
                    item_idx + 1,
                    idx + 1
                ))
            })?;

            // Numbering is per category, so the index restarts at 1 here.
            item.insert("id".to_string(), Value::String((item_idx + 1).to_string()));

            if !item.contains_key("quiz")
                || !item.contains_key("options")
                || !item.contains_key("correct")
            {
                return Err(ProcessError::Validation(
                    "quiz, options, or correct key is missing in one of the data items"
                        .to_string(),
                ));
            }

            let quiz = item.get("quiz").and_then(Value::as_str).unwrap_or("");
            if !quiz.contains(PLACEHOLDER_MARKER) {
                return Err(ProcessError::Validation(
                    "quiz does not contain the required placeholder".to_string(),
                ));
            }

            item.insert(
                "quesion".to_string(),
                Value::String(FIXED_PROMPT.to_string()),
            );
            item.insert("quizType".to_string(), Value::String(QUIZ_TYPE.to_string()));
            item_count += 1;
        }
    }

    Ok(NormalizeSummary {
        categories: category_count,
        items: item_count,
    })
}

/// Loads the quiz file, normalizes it, and rewrites it in place. The write
/// only happens after the entire walk succeeds, so a validation failure
/// leaves the on-disk file untouched.
pub fn process(path: &Path) -> Result<NormalizeSummary, ProcessError> {
    let raw = fs::read_to_string(path).map_err(|source| ProcessError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&raw)?;
    let summary = normalize(&mut doc)?;

    // Matches the app's on-disk format: 2-space indent, non-ASCII kept literal.
    let rendered = serde_json::to_string_pretty(&doc)?;
    fs::write(path, rendered).map_err(|source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(summary)
}
