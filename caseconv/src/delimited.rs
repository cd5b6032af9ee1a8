/// Converts a string to words joined by `delimiter`, uppercased when `screaming` is set
/// (with `delimiter = '.'; screaming = true` this is `SCREAMING.DELIMITED.SNAKE.CASE`).
///
/// Word boundaries are transitions between the ASCII classes uppercase, lowercase and digit.
/// An uppercase run followed by a lowercase tail counts as one word, split before its last
/// letter, so acronyms survive: `"JSONData"` becomes `"json_data"`. Existing separators
/// (space, underscore, hyphen, dot) are replaced by `delimiter`.
///
/// Characters in `ignore` are exempt from separator substitution, and a would-be boundary is
/// suppressed when the character right before it is ignored. Everything outside the recognized
/// ASCII ranges passes through unchanged, so the function is total: any input produces output,
/// and empty input produces empty output.
pub fn to_screaming_delimited(s: &str, delimiter: char, ignore: &str, screaming: bool) -> String {
    let s = s.trim();
    let mut out = String::with_capacity(s.len() + 2);

    let mut prev: Option<char> = None;
    let mut chars = s.chars().peekable();
    while let Some(v) = chars.next() {
        // Boundary detection uses the classes of the input, not of the folded output.
        let v_is_upper = v.is_ascii_uppercase();
        let v_is_lower = v.is_ascii_lowercase();
        let v_is_digit = v.is_ascii_digit();

        let folded = if screaming {
            v.to_ascii_uppercase()
        } else {
            v.to_ascii_lowercase()
        };

        if let Some(&next) = chars.peek() {
            let next_is_upper = next.is_ascii_uppercase();
            let next_is_lower = next.is_ascii_lowercase();
            let next_is_digit = next.is_ascii_digit();

            // A boundary is a class change across the pair. Same-class runs never split
            // (digit runs like "000" stay intact); separators and any other characters are
            // handled by the substitution step below instead.
            let boundary = (v_is_upper && (next_is_lower || next_is_digit))
                || (v_is_lower && (next_is_upper || next_is_digit))
                || (v_is_digit && (next_is_upper || next_is_lower));

            if boundary && !prev.is_some_and(|p| ignore.contains(p)) {
                // An uppercase run with a lowercase tail is one acronym word; the split lands
                // before the run's last letter ("JSONData": between "JSON" and "Data").
                if v_is_upper && next_is_lower && prev.is_some_and(|p| p.is_ascii_uppercase()) {
                    out.push(delimiter);
                }
                out.push(folded);
                if v_is_lower || v_is_digit || next_is_digit {
                    out.push(delimiter);
                }
                prev = Some(v);
                continue;
            }
        }

        // Replace space/underscore/hyphen/dot with the delimiter, unless ignored.
        if matches!(v, ' ' | '_' | '-' | '.') && !ignore.contains(v) {
            out.push(delimiter);
        } else {
            out.push(folded);
        }
        prev = Some(v);
    }

    out
}
