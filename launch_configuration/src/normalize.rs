/// Rewrite editor-flavoured JSON into text a strict parser accepts.
///
/// Exactly two constructs are handled: full-line `//` comments, which
/// are dropped entirely, and a trailing comma on the line before a
/// closing `}`. A comment after real content on the same line, block
/// comments and commas dangling before `]` pass through untouched and
/// will fail downstream parsing.
pub fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out = String::with_capacity(text.len());

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }

        let mut line = *line;
        if trimmed.ends_with(',') {
            // a comma on the final line has no next line to justify
            // stripping it
            if let Some(next) = lines.get(idx + 1) {
                let next = next.trim();
                if next == "}" || next == "}," {
                    line = line.trim_end_matches(',');
                }
            }
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}
