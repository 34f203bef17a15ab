use anyhow::{Context, Result};
use serde::Serialize;
use std::str::FromStr;

use kinship::{Gender, Member, NodeLabel, Registry, SharedRegistry};

use crate::config::{OutputFormat, Settings};

/// State shared by every command
pub struct AppState {
    pub registry: SharedRegistry,
    pub settings: Settings,
}

impl AppState {
    /// Load the configured family snapshot, then apply inline members on top.
    pub fn load(settings: Settings, inline: &[MemberSpec]) -> Result<Self> {
        let mut registry = Registry::new();

        if let Some(path) = &settings.family.path {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading family file {}", path.display()))?;
            registry
                .import_json(&json)
                .with_context(|| format!("loading family file {}", path.display()))?;
        }

        for spec in inline {
            registry.upsert(
                &spec.name,
                spec.gender,
                spec.parent.as_deref(),
                spec.spouse.as_deref(),
            )?;
        }

        Ok(Self {
            registry: SharedRegistry::new(registry),
            settings,
        })
    }

    pub fn emit<R: Report>(&self, report: &R) -> Result<()> {
        match self.settings.output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
            OutputFormat::Text => println!("{}", report.text()),
        }
        Ok(())
    }
}

/// Command output that renders as either text or JSON
pub trait Report: Serialize {
    fn text(&self) -> String;
}

// -- Inline member flag --

/// `NAME:GENDER[:PARENT[:SPOUSE]]`, empty fields meaning none
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    pub name: String,
    pub gender: Gender,
    pub parent: Option<String>,
    pub spouse: Option<String>,
}

impl FromStr for MemberSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').map(str::trim).collect();
        if fields.len() < 2 || fields.len() > 4 {
            return Err(format!("expected NAME:GENDER[:PARENT[:SPOUSE]], got {:?}", s));
        }

        let optional = |i: usize| {
            fields
                .get(i)
                .filter(|f| !f.is_empty())
                .map(|f| f.to_string())
        };

        Ok(Self {
            name: fields[0].to_string(),
            gender: fields[1].parse().map_err(|e: kinship::KinshipError| e.to_string())?,
            parent: optional(2),
            spouse: optional(3),
        })
    }
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct MemberList {
    pub members: Vec<Member>,
}

#[derive(Serialize, Clone)]
pub struct MemberData {
    #[serde(flatten)]
    pub member: Member,
    pub registered_parent: bool,
    pub registered_spouse: bool,
}

#[derive(Serialize, Clone)]
pub struct ChainData {
    pub name: String,
    pub chain: Vec<String>,
}

#[derive(Serialize, Clone)]
pub struct TitleData {
    pub reference: String,
    pub target: String,
    pub title: String,
    pub up: Option<u32>,
    pub down: Option<u32>,
    pub chon: Option<u32>,
    pub common_ancestor: Option<String>,
}

#[derive(Serialize, Clone)]
pub struct LabelData {
    pub reference: String,
    pub labels: Vec<NodeLabel>,
}

#[derive(Serialize, Clone)]
pub struct SpousePair {
    pub a: String,
    pub b: String,
}

#[derive(Serialize, Clone)]
pub struct SpouseData {
    pub pairs: Vec<SpousePair>,
}

#[derive(Serialize, Clone)]
pub struct TableData {
    pub max_degree: u32,
    pub rows: Vec<Vec<String>>,
}

#[derive(Serialize, Clone)]
pub struct BenchmarkResult {
    pub members: u32,
    pub references: u32,
    pub total_ms: f64,
    pub per_reference_ms: f64,
}

fn gender_word(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "M",
        Gender::Female => "F",
    }
}

fn describe(member: &Member) -> String {
    format!(
        "{} ({}) parent={} spouse={}",
        member.name,
        gender_word(member.gender),
        member.parent().unwrap_or("-"),
        member.spouse().unwrap_or("-"),
    )
}

impl Report for MemberList {
    fn text(&self) -> String {
        self.members.iter().map(describe).collect::<Vec<_>>().join("\n")
    }
}

impl Report for MemberData {
    fn text(&self) -> String {
        let mut line = describe(&self.member);
        if self.member.parent().is_some() && !self.registered_parent {
            line.push_str(" [parent unregistered]");
        }
        if self.member.spouse().is_some() && !self.registered_spouse {
            line.push_str(" [spouse unregistered]");
        }
        line
    }
}

impl Report for ChainData {
    fn text(&self) -> String {
        self.chain.join(" -> ")
    }
}

impl Report for TitleData {
    fn text(&self) -> String {
        match (self.up, self.down, self.chon) {
            (Some(up), Some(down), Some(chon)) => format!(
                "{} is {}'s {} (up {}, down {}, {} chon)",
                self.reference, self.target, self.title, up, down, chon
            ),
            _ => format!("{} -> {}: {}", self.reference, self.target, self.title),
        }
    }
}

impl Report for LabelData {
    fn text(&self) -> String {
        let width = self.labels.iter().map(|l| l.name.len()).max().unwrap_or(0);
        self.labels
            .iter()
            .map(|l| match l.chon {
                Some(chon) => format!("{:width$}  {} ({} chon)", l.name, l.title, chon),
                None => format!("{:width$}  {}", l.name, l.title),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Report for SpouseData {
    fn text(&self) -> String {
        self.pairs
            .iter()
            .map(|p| format!("{} = {}", p.a, p.b))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Report for TableData {
    fn text(&self) -> String {
        let columns = self.max_degree as usize + 1;
        let widths: Vec<usize> = (0..columns)
            .map(|c| self.rows.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();

        let mut out = String::from("up\\down");
        for (c, width) in widths.iter().enumerate() {
            out.push_str(&format!("  {:width$}", c, width = *width));
        }
        for (up, row) in self.rows.iter().enumerate() {
            out.push_str(&format!("\n{:7}", up));
            for (cell, width) in row.iter().zip(&widths) {
                out.push_str(&format!("  {:width$}", cell, width = *width));
            }
        }
        out
    }
}

impl Report for BenchmarkResult {
    fn text(&self) -> String {
        format!(
            "{} members, {} references: {:.2} ms total, {:.3} ms per reference",
            self.members, self.references, self.total_ms, self.per_reference_ms
        )
    }
}

impl Report for Settings {
    fn text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_spec_full() {
        let spec: MemberSpec = "Jiho:M:Dohyun:Sora".parse().unwrap();
        assert_eq!(spec.name, "Jiho");
        assert_eq!(spec.gender, Gender::Male);
        assert_eq!(spec.parent.as_deref(), Some("Dohyun"));
        assert_eq!(spec.spouse.as_deref(), Some("Sora"));
    }

    #[test]
    fn test_member_spec_empty_fields() {
        let spec: MemberSpec = "Sora:female::Jiho".parse().unwrap();
        assert_eq!(spec.parent, None);
        assert_eq!(spec.spouse.as_deref(), Some("Jiho"));

        let spec: MemberSpec = "Root:F".parse().unwrap();
        assert_eq!(spec.parent, None);
        assert_eq!(spec.spouse, None);
    }

    #[test]
    fn test_member_spec_rejects_bad_input() {
        assert!("JustAName".parse::<MemberSpec>().is_err());
        assert!("A:X".parse::<MemberSpec>().is_err());
        assert!("A:M:B:C:D".parse::<MemberSpec>().is_err());
    }

    #[test]
    fn test_inline_members_build_registry() {
        let inline: Vec<MemberSpec> = ["A:M", "B:F:A", "C:M:A"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let state = AppState::load(Settings::default(), &inline).unwrap();
        assert_eq!(state.registry.relationship_title("B", "C"), "sibling");
    }

    #[test]
    fn test_table_text_has_header_and_rows() {
        let report = TableData { max_degree: 2, rows: kinship::degree_table(2) };
        let text = report.text();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(2).unwrap().contains("parent"));
    }
}
