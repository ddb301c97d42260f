//! Identifier aliasing used by templates.
//!
//! Only the first character changes and only ASCII letters are mapped: a
//! non-ASCII first character is returned unchanged (unsupported edge case).

/// `SayHello` → `sayHello`
pub fn lower_camel(s: &str) -> String {
    map_first(s, |c| c.to_ascii_lowercase())
}

/// `sayHello` → `SayHello`, `user_id` → `User_id`
pub fn title_case(s: &str) -> String {
    map_first(s, |c| c.to_ascii_uppercase())
}

fn map_first(s: &str, f: impl Fn(char) -> char) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(f(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
