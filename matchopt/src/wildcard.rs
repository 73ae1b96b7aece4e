/// Match `subject` against a glob `pattern`.
///
/// Two wildcards are understood: `*` matches zero or more bytes and `?`
/// matches exactly one; everything else is literal. The whole subject must
/// match the whole pattern. Matching is byte-oriented with single-anchor
/// backtracking: on a mismatch after a `*`, the star's anchor advances one
/// byte and matching resumes just past the star.
pub fn match_wildcard(pattern: &str, subject: &str) -> bool {
    let p = pattern.as_bytes();
    let s = subject.as_bytes();

    let mut pi = 0;
    let mut si = 0;
    // (pattern position past the last '*', subject anchor) for backtracking.
    let mut star: Option<(usize, usize)> = None;

    while si < s.len() {
        match p.get(pi) {
            Some(b'?') => {
                si += 1;
                pi += 1;
            }
            Some(b'*') => {
                pi += 1;
                if pi == p.len() {
                    return true;
                }
                star = Some((pi, si));
            }
            Some(&c) if c == s[si] => {
                si += 1;
                pi += 1;
            }
            _ => {
                let Some((resume, anchor)) = star else {
                    return false;
                };
                star = Some((resume, anchor + 1));
                si = anchor + 1;
                pi = resume;
            }
        }
    }

    // Subject exhausted: forgive one trailing star.
    if p.get(pi) == Some(&b'*') {
        pi += 1;
    }
    pi == p.len()
}
