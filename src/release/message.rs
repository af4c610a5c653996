//! Annotated tag message rendering.

/// Render the tag message: a `Sprint <N>` header and one bullet per merged
/// branch, in input order, with a trailing newline after the last bullet.
///
/// Zero branches still renders the header and the separating blank line.
pub fn render_tag_message(sprint_ordinal: u64, branches: &[String]) -> String {
    let mut message = format!("Sprint {}\n\n", sprint_ordinal);

    for branch in branches {
        message.push_str(&format!("* {}\n", branch));
    }

    message
}
