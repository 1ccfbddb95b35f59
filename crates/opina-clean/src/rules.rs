//! Declarative cleaning rules.
//!
//! Source platforms disagree on column names and on categorical
//! spellings. Both problems are handled by small lookup tables so new
//! aliases are additive data changes, not new conditionals. The whole
//! configuration is built once at startup and passed into each stage.

use std::collections::BTreeMap;

/// Column-name recognition rules used by schema reconciliation.
///
/// Alias lists are matched against normalized (trimmed, lowercased)
/// header names; `comment_tokens` are substring matches used when no
/// header is literally a known comment column.
#[derive(Debug, Clone)]
pub struct ReconcileRules {
    /// Author handle column (wins the identity merge).
    pub handle_aliases: Vec<&'static str>,
    /// Author display-name column (identity-merge fallback).
    pub display_name_aliases: Vec<&'static str>,
    /// Country column.
    pub country_aliases: Vec<&'static str>,
    /// Sentiment column.
    pub sentiment_aliases: Vec<&'static str>,
    /// Literal comment-column names, tried before token search.
    pub comment_aliases: Vec<&'static str>,
    /// Substrings that mark a column as comment-bearing.
    pub comment_tokens: Vec<&'static str>,
}

impl Default for ReconcileRules {
    fn default() -> Self {
        Self {
            handle_aliases: vec!["usuario", "handle", "user", "username"],
            display_name_aliases: vec!["nombre", "name"],
            country_aliases: vec!["pais", "país", "country"],
            sentiment_aliases: vec!["sentimiento", "sentiment"],
            comment_aliases: vec!["comentario", "comment"],
            comment_tokens: vec!["coment", "comment", "text", "opinion", "review", "resena"],
        }
    }
}

impl ReconcileRules {
    /// First column whose normalized name is in `aliases`.
    pub fn find_alias(&self, headers: &[String], aliases: &[&'static str]) -> Option<usize> {
        headers
            .iter()
            .position(|header| aliases.contains(&header.as_str()))
    }

    /// First column whose normalized name contains a comment token.
    pub fn find_comment_by_token(&self, headers: &[String]) -> Option<usize> {
        headers.iter().position(|header| {
            self.comment_tokens
                .iter()
                .any(|token| header.contains(token))
        })
    }
}

/// Full cleaning configuration: reconciliation rules plus categorical
/// alias corrections.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub rules: ReconcileRules,
    /// Exact-match country spelling corrections, applied after text
    /// normalization (keys and values are already normalized forms).
    pub country_aliases: BTreeMap<String, String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        let mut country_aliases = BTreeMap::new();
        country_aliases.insert("estados unidos".to_string(), "usa".to_string());
        country_aliases.insert("brazil".to_string(), "brasil".to_string());
        Self {
            rules: ReconcileRules::default(),
            country_aliases,
        }
    }
}
