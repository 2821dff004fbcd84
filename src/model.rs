//! Snippet model and the hand-authored built-in entries.

/// One snippet-definition entry.
///
/// Body lines are raw text; quoting and quote-escaping happen at render time
/// so built-in and extracted entries go through the same pass.
#[derive(Debug, Clone)]
pub struct Snippet {
    /// Lookup key and trigger prefix.
    pub resource_name: String,
    /// Ordered body lines, unquoted.
    pub body: Vec<String>,
    /// Suppress the documentation-URL comment line (built-ins have no
    /// registry page to point at).
    pub no_url: bool,
}

impl Snippet {
    pub fn new(resource_name: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            body,
            no_url: false,
        }
    }
}

fn builtin(resource_name: &str, body: &[&str]) -> Snippet {
    Snippet {
        resource_name: resource_name.to_string(),
        body: body.iter().map(|s| s.to_string()).collect(),
        no_url: true,
    }
}

/// The fixed entries emitted before any extracted snippet.
///
/// `\t` is written as a two-character escape sequence (not a raw tab byte) so
/// the assembled document stays strictly parseable JSON; snippet consumers
/// expand it to a tab on insertion. `$1`…`$n` are editor tab stops.
pub fn builtins() -> Vec<Snippet> {
    vec![
        builtin(
            "required_providers",
            &[
                r#"terraform {"#,
                r#"\trequired_providers {"#,
                r#"\t\taws = {"#,
                r#"\t\t\tsource = "hashicorp/aws""#,
                r#"\t\t\tversion = "~> 5.0""#,
                r#"\t\t}"#,
                r#""#,
                r#"\t\t#\tbackend "s3" {"#,
                r#"\t\t#\t\tbucket = "bucket name""#,
                r#"\t\t#\t\tkey = "path/to/my/key""#,
                r#"\t\t#\t\tregion = """#,
                r#"\t\t#\t}"#,
                r#"\t}"#,
                r#"}"#,
            ],
        ),
        builtin(
            "aws",
            &[
                r#"provider "aws" {"#,
                r#"\tregion = $1"#,
                r#"}"#,
            ],
        ),
        builtin(
            "var",
            &[
                r#"variable "$1" {"#,
                r#"\ttype = $2"#,
                r#"\tvalue = $3"#,
                r#"\tdefault = $3"#,
                r#"\tdescription = $4"#,
                r#"}"#,
            ],
        ),
        builtin(
            "out",
            &[
                r#"output "$1" {"#,
                r#"\tvalue = $2"#,
                r#"\tdescription = $3"#,
                r#"}"#,
            ],
        ),
    ]
}
