//! Keyword-based classification
//!
//! Two static tables map canonical technology and compliance-framework
//! names to case-insensitive, word-boundary anchored patterns. The tables
//! are compiled once and shared read-only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical name paired with its compiled pattern
pub type KeywordTable = Vec<(&'static str, Regex)>;

fn compile(entries: &[(&'static str, &str)]) -> KeywordTable {
    entries
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(&format!("(?i){pattern}")).unwrap()))
        .collect()
}

pub static TECHNOLOGY_PATTERNS: Lazy<KeywordTable> = Lazy::new(|| {
    compile(&[
        ("AWS", r"\b(?:aws|amazon web services)\b"),
        ("Azure", r"\b(?:microsoft )?azure\b"),
        ("Google Cloud", r"\b(?:google cloud(?: platform)?|gcp)\b"),
        ("Kubernetes", r"\b(?:kubernetes|k8s)\b"),
        ("Docker", r"\bdocker\b"),
        ("OpenShift", r"\bopenshift\b"),
        ("Helm", r"\bhelm (?:charts?|releases?)\b"),
        ("Terraform", r"\bterraform\b"),
        ("Ansible", r"\bansible\b"),
        ("Jenkins", r"\bjenkins\b"),
        ("GitHub Actions", r"\bgithub actions\b"),
        ("GitLab CI", r"\bgitlab[ -]ci\b"),
        ("Lambda", r"\b(?:aws )?lambda functions?\b|\baws lambda\b"),
        ("Python", r"\bpython\b"),
        ("Java", r"\bjava\b"),
        ("JavaScript", r"\bjavascript\b"),
        ("TypeScript", r"\btypescript\b"),
        // Bare "go" is far too common; require the language context
        ("Go", r"\b(?:golang|go (?:language|programming|modules?|routines?|services?))\b"),
        ("Rust", r"\brust (?:language|programming|crates?|services?)\b|\brustlang\b"),
        ("C#", r"\bc#(?:\W|$)"),
        (".NET", r"(?:^|\W)\.net(?: core| framework)?\b"),
        ("Node.js", r"\bnode\.?js\b"),
        ("React", r"\breact(?:\.?js)?\b"),
        ("Angular", r"\bangular(?:js)?\b"),
        ("Vue.js", r"\bvue(?:\.?js)?\b"),
        ("Django", r"\bdjango\b"),
        ("Spring Boot", r"\bspring boot\b"),
        ("PostgreSQL", r"\b(?:postgresql|postgres)\b"),
        ("MySQL", r"\bmysql\b"),
        ("MongoDB", r"\bmongo(?:db)?\b"),
        ("Redis", r"\bredis\b"),
        ("Elasticsearch", r"\belastic ?search\b"),
        ("Kafka", r"\b(?:apache )?kafka\b"),
        ("RabbitMQ", r"\brabbitmq\b"),
        ("GraphQL", r"\bgraphql\b"),
        ("Microservices", r"\bmicro-?services?\b"),
        ("Serverless", r"\bserverless\b"),
        ("Linux", r"\blinux\b"),
        ("Nginx", r"\bnginx\b"),
        ("Prometheus", r"\bprometheus\b"),
        ("Grafana", r"\bgrafana\b"),
        ("Snowflake", r"\bsnowflake\b"),
        ("Databricks", r"\bdatabricks\b"),
        ("Apache Spark", r"\b(?:apache spark|pyspark|spark (?:jobs?|clusters?|sql))\b"),
        ("Salesforce", r"\bsalesforce\b"),
        ("ServiceNow", r"\bservicenow\b"),
    ])
});

pub static COMPLIANCE_PATTERNS: Lazy<KeywordTable> = Lazy::new(|| {
    compile(&[
        ("GDPR", r"\b(?:gdpr|general data protection regulation)\b"),
        ("HIPAA", r"\bhipaa\b"),
        ("SOC 2", r"\bsoc ?2\b|\bsoc ii\b"),
        ("ISO 27001", r"\biso(?:/iec)? ?27001\b"),
        ("ISO 9001", r"\biso ?9001\b"),
        ("PCI DSS", r"\bpci(?:[ -]dss)?\b"),
        ("NIST", r"\bnist\b"),
        ("FedRAMP", r"\bfedramp\b"),
        ("CCPA", r"\b(?:ccpa|california consumer privacy act)\b"),
        ("SOX", r"\b(?:sox|sarbanes[ -]oxley)\b"),
        ("FISMA", r"\bfisma\b"),
        ("CMMC", r"\bcmmc\b"),
        ("HITRUST", r"\bhitrust\b"),
        ("NIS2", r"\bnis ?2\b"),
    ])
});

fn detect(table: &KeywordTable, text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = table
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| name.to_string())
        .collect();
    found.sort_unstable();
    found.dedup();
    found
}

/// Technologies mentioned in `text`, alphabetically sorted, each once
pub fn detect_technologies(text: &str) -> Vec<String> {
    detect(&TECHNOLOGY_PATTERNS, text)
}

/// Compliance frameworks mentioned in `text`, alphabetically sorted, each once
pub fn detect_compliance_frameworks(text: &str) -> Vec<String> {
    detect(&COMPLIANCE_PATTERNS, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile_and_are_disjoint() {
        assert!(TECHNOLOGY_PATTERNS.len() >= 40);
        assert_eq!(COMPLIANCE_PATTERNS.len(), 14);

        for (name, _) in TECHNOLOGY_PATTERNS.iter() {
            assert!(
                !COMPLIANCE_PATTERNS.iter().any(|(other, _)| other == name),
                "{name} appears in both tables"
            );
        }
    }

    #[test]
    fn test_aws_and_lambda_sorted_once() {
        let found = detect_technologies("We run on AWS. Our aws lambda handlers run on AWS too.");
        assert_eq!(found, vec!["AWS".to_string(), "Lambda".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        assert!(detect_technologies("").is_empty());
        assert!(detect_compliance_frameworks("   ").is_empty());
    }

    #[test]
    fn test_word_boundaries_prevent_substring_hits() {
        assert!(detect_technologies("Let's go to the meeting").is_empty());
        assert!(detect_technologies("the javascript bundle") == vec!["JavaScript".to_string()]);
        assert!(detect_technologies("trusted rustic furniture").is_empty());
        assert_eq!(
            detect_technologies("Services written in Golang and C# on .NET Core"),
            vec![".NET".to_string(), "C#".to_string(), "Go".to_string()]
        );
    }

    #[test]
    fn test_compliance_frameworks() {
        let found = detect_compliance_frameworks(
            "Controls map to ISO/IEC 27001, SOC 2 Type II and the GDPR; HIPAA is out of scope.",
        );
        assert_eq!(
            found,
            vec![
                "GDPR".to_string(),
                "HIPAA".to_string(),
                "ISO 27001".to_string(),
                "SOC 2".to_string()
            ]
        );
    }
}
