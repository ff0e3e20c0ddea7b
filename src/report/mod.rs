//! Self-contained HTML view of one analysis.
//!
//! The page embeds the uploaded structure text and hands it to 3Dmol.js for the
//! 3D view; everything else is static HTML.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::api::AnalysisOutput;
use crate::structure::{ParsedStructure, Upload};
use crate::suggest::Suggestion;

/// Render the report page.
pub fn render_html_report(upload: &Upload, output: &AnalysisOutput) -> String {
    let mut html = String::new();

    html.push_str(include_str!("templates/report_header.html"));
    html.push_str(&format!(
        "<h1>Peptide Report <span class='note'>{}</span></h1>",
        escape_html(&upload.file_name)
    ));

    write_sequence_section(&mut html, &output.structure);
    write_residue_section(&mut html, &output.structure);
    write_viewer_section(&mut html, upload, &output.structure.chain_id);
    write_random_section(&mut html, &output.random_peptides);
    write_suggestion_section(&mut html, &output.suggestions);

    html.push_str(include_str!("templates/report_footer.html"));
    html
}

pub fn write_html_report(upload: &Upload, output: &AnalysisOutput, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let html = render_html_report(upload, output);

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;

    Ok(())
}

fn write_sequence_section(html: &mut String, structure: &ParsedStructure) {
    html.push_str("<section>");
    html.push_str(&format!(
        "<h2>Primary Sequence <span class='note'>chain {}, {} residues</span></h2>",
        escape_html(&structure.chain_id),
        structure.len()
    ));
    html.push_str(&format!(
        "<pre class='sequence'>{}</pre>",
        escape_html(&structure.sequence)
    ));
    html.push_str("</section>");
}

fn write_residue_section(html: &mut String, structure: &ParsedStructure) {
    html.push_str("<section><h2>Residue Summary</h2><div class='residue-table'><table>");
    html.push_str("<thead><tr><th>#</th><th>Residue</th><th>CA x</th><th>CA y</th><th>CA z</th></tr></thead><tbody>");

    for residue in &structure.residues {
        let id = residue
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "&ndash;".to_string());
        let [x, y, z] = match residue.ca_coord {
            Some([x, y, z]) => [x, y, z].map(|v| format!("{:.3}", v)),
            None => ["&ndash;".to_string(), "&ndash;".to_string(), "&ndash;".to_string()],
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            id,
            escape_html(&residue.name),
            x,
            y,
            z
        ));
    }

    html.push_str("</tbody></table></div></section>");
}

fn write_viewer_section(html: &mut String, upload: &Upload, chain_id: &str) {
    html.push_str("<section><h2>3D Structure</h2>");
    html.push_str(&format!(
        "<div id='structure-viewer' class='viewer' data-chain='{}'></div>",
        escape_html(chain_id)
    ));
    html.push_str(&format!(
        "<textarea id='structure-data' hidden>{}</textarea>",
        escape_html(&upload.content)
    ));
    html.push_str("</section>");
}

fn write_random_section(html: &mut String, peptides: &[String]) {
    html.push_str("<section><h2>Random Peptides</h2>");
    if peptides.is_empty() {
        html.push_str("<p class='note'>No peptides could be drawn with these settings.</p>");
    } else {
        html.push_str("<ul class='peptides'>");
        for peptide in peptides {
            html.push_str(&format!("<li><code>{}</code></li>", escape_html(peptide)));
        }
        html.push_str("</ul>");
    }
    html.push_str("</section>");
}

fn write_suggestion_section(html: &mut String, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        return;
    }
    html.push_str("<section><h2>Suggested Peptides</h2>");
    for suggestion in suggestions {
        html.push_str("<div class='peptide'>");
        html.push_str(&format!(
            "<h3>Peptide: <code>{}</code></h3>",
            escape_html(&suggestion.sequence)
        ));
        if let Some(properties) = &suggestion.properties {
            html.push_str("<table><tbody>");
            for (label, value) in properties.entries() {
                add_table_row(html, label, escape_html(&value));
            }
            html.push_str("</tbody></table>");
        }
        html.push_str(&format!(
            "<p class='explanation'><strong>Reason for selection:</strong> {}</p>",
            escape_html(&suggestion.explanation)
        ));
        html.push_str("</div>");
    }
    html.push_str("</section>");
}

fn add_table_row(html: &mut String, label: &str, value: impl std::fmt::Display) {
    html.push_str(&format!(r#"<tr><td>{}</td><td>{}</td></tr>"#, label, value));
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
