//! Whole-table listings.

use rainfo_core::{StateAtlas, TipCategory};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
struct StateListing<'a> {
    code: &'a str,
    name: &'a str,
    inches: Option<f64>,
}

/// Every state in table order, as an aligned table or a JSON array.
pub fn render_states(atlas: &StateAtlas, json: bool) -> anyhow::Result<String> {
    let rows: Vec<StateListing> = atlas
        .states()
        .iter()
        .map(|s| StateListing {
            code: &s.code,
            name: &s.name,
            inches: atlas.lookup_rainfall(&s.name),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = String::new();
    for row in &rows {
        let inches = row.inches.map(|i| format!("{:.1}", i)).unwrap_or_default();
        writeln!(out, "{}  {:<15} {:>5}", row.code, row.name, inches)?;
    }
    Ok(out.trim_end().to_string())
}

/// Tips grouped under their category headings.
pub fn render_tips(category: Option<TipCategory>) -> String {
    let categories: Vec<TipCategory> = match category {
        Some(c) => vec![c],
        None => TipCategory::ALL.to_vec(),
    };
    categories
        .iter()
        .map(|c| {
            let mut section = c.label().to_string();
            for tip in c.tips() {
                section.push_str("\n  - ");
                section.push_str(&tip.full_text());
            }
            section
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_states_table() {
        let table = render_states(StateAtlas::embedded(), false).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 50);
        assert_eq!(lines[0], "AL  alabama          58.3");
        assert!(lines[10].starts_with("HI  hawaii"));
        assert!(lines[10].ends_with("63.7"));
    }

    #[test]
    fn test_render_states_json() {
        let json = render_states(StateAtlas::embedded(), true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 50);
        assert_eq!(rows[4]["code"], "CA");
        assert_eq!(rows[4]["name"], "california");
        assert_eq!(rows[4]["inches"], 22.2);
    }

    #[test]
    fn test_render_one_category() {
        let text = render_tips(Some(TipCategory::Faucets));
        assert_eq!(
            text,
            "Faucets\n  - Turn the faucet off while brushing.\n  - Wash your dishes using tubs.\n  - Fix leaking faucets and pipes."
        );
    }

    #[test]
    fn test_render_all_tips() {
        let text = render_tips(None);
        assert!(text.starts_with("Showers\n"));
        assert!(text.contains("\n\nExtra\n  - Record your water usage and set limits."));
    }
}
