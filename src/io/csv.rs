//! CSV profile table reader/writer
//!
//! Canonical header: `id,name,age,location,interests` with interests
//! semicolon-separated; on import every column is resolved by header
//! name, not position. Any column beyond the required four and
//! `interests` becomes an open-ended profile-map entry keyed by its
//! header. CSV carries profiles only; connections travel in the JSON
//! document.

use super::ParseError;
use crate::graph::SocialGraph;
use crate::profile::UserProfile;
use std::path::Path;
use tracing::debug;

const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "age", "location"];

/// Load a CSV profile table.
///
/// Columns are resolved by header name, so column order does not matter.
/// Every record is parsed before any graph state is built; a header
/// missing a required column or the first malformed record fails the
/// whole load. Each row registers one user in the returned graph (no
/// connections).
pub fn load_csv(path: &Path) -> Result<(SocialGraph, Vec<UserProfile>), ParseError> {
    let mut reader = ::csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut columns = [0usize; REQUIRED_FIELDS.len()];
    for (slot, field) in REQUIRED_FIELDS.into_iter().enumerate() {
        columns[slot] = headers
            .iter()
            .position(|h| h == field)
            .ok_or(ParseError::MissingColumn(field))?;
    }

    let mut profiles = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let record_no = line as u64 + 1;

        let mut fields = [""; REQUIRED_FIELDS.len()];
        for (slot, field) in REQUIRED_FIELDS.into_iter().enumerate() {
            fields[slot] = match record.get(columns[slot]) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    return Err(ParseError::MissingField {
                        record: record_no,
                        field,
                    })
                }
            };
        }
        let [id, name, age, location] = fields;
        let age: u32 = age.parse().map_err(|_| ParseError::InvalidField {
            record: record_no,
            field: "age",
            value: age.to_string(),
        })?;

        let mut profile = UserProfile::new(id, name, age, location);
        for (i, header) in headers.iter().enumerate() {
            if columns.contains(&i) {
                continue;
            }
            let Some(value) = record.get(i).filter(|v| !v.is_empty()) else {
                continue;
            };
            if header == "interests" {
                for interest in value.split(';').filter(|s| !s.is_empty()) {
                    profile.add_interest(interest);
                }
            } else {
                profile.set_profile_data(header, value);
            }
        }
        profiles.push(profile);
    }

    let mut graph = SocialGraph::new();
    for profile in &profiles {
        graph.add_user(profile.id().clone());
    }

    debug!(
        users = profiles.len(),
        "loaded CSV profile table from {}",
        path.display()
    );
    Ok((graph, profiles))
}

/// Save the profile collection as a CSV table with the canonical header.
/// Open-ended profile-map entries are not exported.
pub fn save_csv(path: &Path, profiles: &[UserProfile]) -> Result<(), ParseError> {
    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(["id", "name", "age", "location", "interests"])?;

    for profile in profiles {
        writer.write_record([
            profile.id().as_str(),
            profile.name(),
            &profile.age().to_string(),
            profile.location(),
            &profile.interests().join(";"),
        ])?;
    }
    writer.flush().map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
