//! Go identifier derivation.
//!
//! Two pure transforms used by the emitters:
//! - [`go_camel_case`]: proto name -> exported Go name, matching protoc-gen-go.
//! - [`to_unexported`]: exported Go name -> field/receiver-style spelling.
//!
//! [`field_name`] and [`clean_package_name`] additionally keep their results
//! clear of Go keywords.

/// Reserved words of the Go language.
pub const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

/// Identifiers of Go's universe scope. Shadowing one with an import alias
/// breaks any generated reference to it (`error` in every dispatch return).
pub const GO_PREDECLARED: &[&str] = &[
    "any", "append", "bool", "byte", "cap", "clear", "close", "comparable",
    "complex", "complex128", "complex64", "copy", "delete", "error", "false",
    "float32", "float64", "imag", "int", "int16", "int32", "int64", "int8",
    "iota", "len", "make", "max", "min", "new", "nil", "panic", "print",
    "println", "real", "recover", "rune", "string", "true", "uint", "uint16",
    "uint32", "uint64", "uint8", "uintptr",
];

pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Convert an exported identifier to its unexported spelling.
///
/// The leading run of uppercase characters is lowercased. When that run is
/// longer than one character and is followed by a lowercase character, its
/// last character begins the next word and keeps its case, so acronyms fold
/// the way Go authors write them.
///
/// ```
/// use protoc_gen_go_client::naming::to_unexported;
///
/// assert_eq!(to_unexported("FooBar"), "fooBar");
/// assert_eq!(to_unexported("HTTPServer"), "httpServer");
/// assert_eq!(to_unexported("ABC"), "abc");
/// ```
pub fn to_unexported(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.first() {
        Some(first) if first.is_uppercase() => {}
        _ => return name.to_string(),
    }

    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lowered = match chars.get(run) {
        Some(next) if run > 1 && next.is_lowercase() => run - 1,
        _ => run,
    };

    let mut out = String::with_capacity(name.len());
    for c in &chars[..lowered] {
        out.extend(c.to_lowercase());
    }
    out.extend(&chars[lowered..]);
    out
}

/// Struct field and composite literal key for an exported service name.
///
/// This is [`to_unexported`] with a trailing `_` appended when the result is
/// a Go keyword (`Type` -> `type_`).
pub fn field_name(exported: &str) -> String {
    let mut name = to_unexported(exported);
    if is_go_keyword(&name) {
        name.push('_');
    }
    name
}

/// Camel-case a proto name into an exported Go identifier.
///
/// Follows protoc-gen-go: `_x` and `.x` word breaks are folded into an
/// uppercase `X`, other dots become underscores, and a leading underscore
/// becomes `X`. Nested message names (`Outer.Inner`) become `Outer_Inner`.
pub fn go_camel_case(name: &str) -> String {
    let bytes = name.as_bytes();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        let next_is_lower = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);
        if c == b'.' && next_is_lower {
            // ".x" folds into "X"
        } else if c == b'.' {
            out.push('_');
        } else if c == b'_' && (i == 0 || bytes[i - 1] == b'.') {
            out.push('X');
        } else if c == b'_' && next_is_lower {
            // "_x" folds into "X"
        } else if c.is_ascii_digit() {
            out.push(c as char);
        } else {
            out.push(c.to_ascii_uppercase() as char);
            while bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase) {
                i += 1;
                out.push(bytes[i] as char);
            }
        }
        i += 1;
    }
    out
}

/// Sanitize a string into a usable Go package name.
///
/// Invalid characters become `_`; a leading digit or a Go keyword gets a `_`
/// prefix.
pub fn clean_package_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.chars().next().is_none_or(|c| c.is_ascii_digit()) || is_go_keyword(&out) {
        out.insert(0, '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexported_table() {
        assert_eq!(to_unexported("FooBar"), "fooBar");
        assert_eq!(to_unexported("HTTPServer"), "httpServer");
        assert_eq!(to_unexported("ABC"), "abc");
        assert_eq!(to_unexported("x"), "x");
        assert_eq!(to_unexported(""), "");
    }

    #[test]
    fn test_unexported_lowercase_start_unchanged() {
        assert_eq!(to_unexported("fooBar"), "fooBar");
        assert_eq!(to_unexported("_Foo"), "_Foo");
        assert_eq!(to_unexported("9Lives"), "9Lives");
    }

    #[test]
    fn test_unexported_acronym_before_digit() {
        assert_eq!(to_unexported("HTTP2Server"), "http2Server");
        assert_eq!(to_unexported("ID"), "id");
        assert_eq!(to_unexported("A"), "a");
    }

    #[test]
    fn test_unexported_non_ascii() {
        assert_eq!(to_unexported("ÉtatService"), "étatService");
    }

    #[test]
    fn test_go_camel_case() {
        assert_eq!(go_camel_case("user_service"), "UserService");
        assert_eq!(go_camel_case("UserService"), "UserService");
        assert_eq!(go_camel_case("get_user_v2"), "GetUserV2");
        assert_eq!(go_camel_case("_private"), "XPrivate");
        assert_eq!(go_camel_case("Outer.Inner"), "Outer_Inner");
        assert_eq!(go_camel_case("outer.inner"), "OuterInner");
        assert_eq!(go_camel_case("foo_1bar"), "Foo_1Bar");
    }

    #[test]
    fn test_clean_package_name() {
        assert_eq!(clean_package_name("grpc"), "grpc");
        assert_eq!(clean_package_name("erda-infra"), "erda_infra");
        assert_eq!(clean_package_name("v1.2"), "v1_2");
        assert_eq!(clean_package_name("2fa"), "_2fa");
    }

    #[test]
    fn test_clean_package_name_escapes_keywords() {
        assert_eq!(clean_package_name("type"), "_type");
        assert_eq!(clean_package_name("func"), "_func");
        assert_eq!(clean_package_name("types"), "types");
        // predeclared names are valid package names; aliasing avoids them
        assert_eq!(clean_package_name("error"), "error");
    }

    #[test]
    fn test_field_name_escapes_keywords() {
        assert_eq!(field_name("UserService"), "userService");
        assert_eq!(field_name("Type"), "type_");
        assert_eq!(field_name("Map"), "map_");
        assert_eq!(field_name("Select"), "select_");
        assert_eq!(field_name("Types"), "types");
    }
}
