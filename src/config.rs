//! Pipeline configuration — explicit replacement for scattered constants.
//!
//! Production defaults reproduce the fixed paths and allow-list the tool has
//! always used; tests substitute their own values.

use std::path::PathBuf;

/// Base URL for resource documentation pages, used for the `#` comment line
/// at the top of each generated snippet body.
pub const DOCUMENT_ROOT: &str =
    "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources";

/// Resource type prefix of the target provider (`resource "aws_…"`).
pub const PROVIDER_PREFIX: &str = "aws";

/// Services to generate snippets for, matched as case-insensitive substrings
/// of cached file names. Hand-maintained: LuaSnip slows down with too many
/// snippets loaded, so the full provider catalog is deliberately not included.
pub const PICKED_SERVICES: &[&str] = &[
    "api_gateway",
    "apigateway",
    "batch",
    "cloudfront",
    "cloudwatch",
    "code",
    "cognito",
    "db",
    "default",
    "ebs",
    "dynamo",
    "ec2",
    "ecs",
    "ecr",
    "efs",
    "eip",
    "eks",
    "elastic",
    "iam",
    "kms",
    "lambda",
    "lb",
    "load_balancer",
    "memorydb",
    "network",
    "rds",
    "route53",
    "s3",
    "ses",
    "sqs",
    "vpc",
    "waf",
];

/// Immutable run configuration, built once in main and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of cached documentation pages (populated by the fetch step).
    pub cache_dir: PathBuf,
    /// Output snippets file; its parent directory is created if absent.
    pub output: PathBuf,
    /// Allow-list fragments for file selection.
    pub services: Vec<String>,
    /// Provider prefix expected in resource declaration headers.
    pub provider_prefix: String,
    /// Documentation base URL for the per-snippet comment line.
    pub doc_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./tmp"),
            output: PathBuf::from("./generated/terraform.json"),
            services: PICKED_SERVICES.iter().map(|s| s.to_string()).collect(),
            provider_prefix: PROVIDER_PREFIX.to_string(),
            doc_root: DOCUMENT_ROOT.to_string(),
        }
    }
}
