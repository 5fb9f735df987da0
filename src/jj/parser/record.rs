//! Change metadata parser (jj log -T <change_record template>)

use super::super::JjError;
use super::super::template::FIELD_SEPARATOR;
use super::Parser;
use crate::model::{ChangeRecord, IdPair};

/// Number of fields emitted by `Templates::change_record`
const RECORD_FIELDS: usize = 9;

impl Parser {
    /// Parse the output of the change metadata template
    ///
    /// Fields: change_id short/full, commit_id short/full, description,
    /// bookmarks, conflict, divergent, hidden.
    pub fn parse_change_record(output: &str) -> Result<ChangeRecord, JjError> {
        // The template terminates every field, including the last one
        let body = output.strip_suffix(FIELD_SEPARATOR).unwrap_or(output);
        let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();

        if fields.len() != RECORD_FIELDS {
            return Err(JjError::ParseError(format!(
                "Expected {} change record fields, got {}: {:?}",
                RECORD_FIELDS,
                fields.len(),
                fields
            )));
        }

        Ok(ChangeRecord {
            change_id: IdPair::new(fields[0].trim(), fields[1].trim()),
            commit_id: IdPair::new(fields[2].trim(), fields[3].trim()),
            description: fields[4].to_string(),
            bookmarks: if fields[5].is_empty() {
                Vec::new()
            } else {
                fields[5].split(',').map(|s| s.to_string()).collect()
            },
            conflict: fields[6] == "true",
            divergent: fields[7] == "true",
            hidden: fields[8].trim_end() == "true",
        })
    }
}
