use crate::errors::{AppError, AppResult};
use crate::models::member::Member;
use std::collections::HashSet;
use std::path::Path;

/// Load the member roster and return it in attendance order.
///
/// A missing file or one without the `ID`, `Full Name` and `Grade` columns
/// is fatal; so is a duplicated identifier.
pub fn load_members(path: &Path, new_member_grade: i64) -> AppResult<Vec<Member>> {
    if !path.is_file() {
        return Err(AppError::RosterMissing(path.display().to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::RosterMalformed(e.to_string()))?;

    let headers = rdr
        .headers()
        .map_err(|e| AppError::RosterMalformed(e.to_string()))?;
    check_headers(headers)?;

    let mut members = Vec::new();
    let mut seen = HashSet::new();

    for (line, result) in rdr.deserialize::<Member>().enumerate() {
        let member = result.map_err(|e| AppError::RosterMalformed(e.to_string()))?;

        if !seen.insert(member.id) {
            return Err(AppError::RosterMalformed(format!(
                "duplicate ID {} on row {}",
                member.id,
                line + 1
            )));
        }

        members.push(Member::new(member.id, &member.full_name, member.grade));
    }

    sort_members(&mut members, new_member_grade);
    Ok(members)
}

/// Accepted spellings of each required column.
const REQUIRED_COLUMNS: [&[&str]; 3] = [
    &["ID", "id"],
    &["Full Name", "full_name", "name"],
    &["Grade", "grade"],
];

fn check_headers(headers: &csv::StringRecord) -> AppResult<()> {
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::RosterMalformed("missing header row".to_string()));
    }

    for names in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| names.contains(&h)) {
            return Err(AppError::RosterMalformed(format!(
                "missing required column '{}'",
                names[0]
            )));
        }
    }
    Ok(())
}

/// Newcomers last, then surname, then given name. Stable for ties.
pub fn sort_members(members: &mut [Member], new_member_grade: i64) {
    members.sort_by_key(|m| sort_key(m, new_member_grade));
}

fn sort_key(member: &Member, new_member_grade: i64) -> (bool, String, String) {
    let (surname, given) = member.surname_given();
    (
        member.is_new(new_member_grade),
        surname.to_lowercase(),
        given.to_lowercase(),
    )
}
