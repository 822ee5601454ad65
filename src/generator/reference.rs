/// How controller classes and actions are referenced in generated routes.
///
/// Selected once per generator: without a root namespace the routes file
/// refers to classes directly (`PostController::class`); with one, routes use
/// the framework's string syntax relative to that namespace
/// (`'Admin\UserController@export'`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceStyle {
    /// `Foo::class` and `[Foo::class, 'method']`.
    Tuple,
    /// `'Foo'` and `'Foo@method'`, with `root` stripped from the class name.
    Namespaced { root: String },
}

impl ReferenceStyle {
    /// Pick the style for an optional root namespace; empty counts as absent.
    pub fn from_root_namespace(root: Option<&str>) -> Self {
        match root.map(|r| r.trim_end_matches('\\')) {
            Some(root) if !root.is_empty() => ReferenceStyle::Namespaced {
                root: root.to_string(),
            },
            _ => ReferenceStyle::Tuple,
        }
    }

    pub fn root_namespace(&self) -> Option<&str> {
        match self {
            ReferenceStyle::Tuple => None,
            ReferenceStyle::Namespaced { root } => Some(root),
        }
    }

    /// Controller argument of an aggregate registration.
    pub fn controller(&self, identifier: &str) -> String {
        match self {
            ReferenceStyle::Tuple => format!("{identifier}::class"),
            ReferenceStyle::Namespaced { root } => {
                php_string_literal(strip_root(root, identifier))
            }
        }
    }

    /// Action argument of an explicit registration.
    pub fn action(&self, identifier: &str, method: &str) -> String {
        match self {
            ReferenceStyle::Tuple => {
                format!("[{identifier}::class, {}]", php_string_literal(method))
            }
            ReferenceStyle::Namespaced { root } => {
                php_string_literal(&format!("{}@{method}", strip_root(root, identifier)))
            }
        }
    }
}

fn strip_root<'a>(root: &str, identifier: &'a str) -> &'a str {
    identifier
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('\\'))
        .unwrap_or(identifier)
}

/// Render `value` as a single-quoted PHP string literal.
///
/// Backslashes are only doubled where PHP would read them as an escape, so
/// class names such as `Admin\UserController` come out as written.
pub fn php_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' if matches!(chars.peek(), None | Some('\\') | Some('\'')) => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
