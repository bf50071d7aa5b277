use super::record::Record;
use chrono::NaiveDate;
use std::fmt::Write;

/// Label column width used when no configuration overrides it.
pub const DEFAULT_LABEL_PADDING: usize = 20;

/// GenBank dates come as `12-JAN-2024`; show them as ISO dates when they parse.
pub fn normalize_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%d-%b-%Y")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.trim().to_string())
}

/// Renders a record as the multi-section text shown on a result page.
///
/// Locus/accession, the molecule-type block, the description block and the
/// record dates are always emitted. Optional fields and the keyword and
/// reference sections are left out entirely when empty.
pub fn pretty_print(record: &Record, label_padding: usize) -> String {
    let mut out = String::new();
    let w = label_padding;

    // `write!` into a String cannot fail
    let _ = writeln!(out, "=== SEQUENCE RECORD ===");
    let _ = writeln!(out, "{:<w$} {}", "Locus:", record.locus);
    let _ = writeln!(out, "{:<w$} {}", "Accession:", record.accession);
    if record.length > 0 {
        let _ = writeln!(out, "{:<w$} {} bp", "Length:", record.length);
    }

    let _ = writeln!(out, "\n--- SEQUENCE CHARACTERISTICS ---");
    let _ = writeln!(out, "{:<w$} {}", "Molecule Type:", record.mol_type);
    if let Some(strand) = &record.strandedness {
        let _ = writeln!(out, "{:<w$} {strand}", "Strand Type:");
    }
    if let Some(topology) = &record.topology {
        let _ = writeln!(out, "{:<w$} {topology}", "Topology:");
    }
    if let Some(division) = &record.division {
        let _ = writeln!(out, "{:<w$} {division}", "Division:");
    }

    let _ = writeln!(out, "\n--- DESCRIPTION ---");
    let _ = writeln!(out, "{:<w$} {}", "Definition:", record.definition);
    let _ = writeln!(out, "{:<w$} {}", "Organism:", record.organism);
    if let Some(taxonomy) = &record.taxonomy {
        let _ = writeln!(out, "{:<w$} {taxonomy}", "Taxonomy:");
    }

    if !record.keywords.is_empty() {
        let _ = writeln!(out, "\n--- KEYWORDS ---");
        for keyword in &record.keywords {
            let _ = writeln!(out, "  • {keyword}");
        }
    }

    if !record.references.is_empty() {
        let _ = writeln!(out, "\n--- REFERENCES ---");
        for reference in &record.references {
            let _ = writeln!(out, "Reference {}:", reference.number);
            if let Some(title) = &reference.title {
                let _ = writeln!(out, "  {:<w$} {title}", "Title:");
            }
            match reference.authors.as_slice() {
                [] => {}
                [only] => {
                    let _ = writeln!(out, "  {:<w$} {only}", "Author:");
                }
                [first, ..] => {
                    let _ = writeln!(out, "  {:<w$} {first} et al.", "Authors:");
                }
            }
            if let Some(journal) = &reference.journal {
                let _ = writeln!(out, "  {:<w$} {journal}", "Journal:");
            }
            if let Some(pubmed) = &reference.pubmed {
                let _ = writeln!(out, "  {:<w$} {pubmed}", "PubMed:");
            }
            out.push('\n');
        }
    } else {
        out.push('\n');
    }

    let _ = writeln!(out, "--- RECORD INFO ---");
    let _ = writeln!(out, "{:<w$} {}", "Created:", normalize_date(&record.create_date));
    let _ = writeln!(out, "{:<w$} {}", "Last Updated:", normalize_date(&record.update_date));

    out.trim().to_string()
}
