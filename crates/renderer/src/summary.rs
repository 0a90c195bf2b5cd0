//! Sortable Key/Value/Percentage summary of a frequency table

use serde::{Deserialize, Serialize};

use freq_charts_shared::{format_value, FrequencyTable};

/// Column the summary is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Lexicographic by label, ascending
    Key,
    /// By value, descending
    #[default]
    Value,
}

/// One data row of the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: f64,
    /// Share of the total, 0–100
    pub percent: f64,
}

impl SummaryRow {
    /// Percentage to one decimal, e.g. "33.3%".
    pub fn percent_display(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// Sorted rows plus the grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
    pub total: f64,
    pub sort: SortMethod,
}

impl SummaryTable {
    pub fn build(table: &FrequencyTable, sort: SortMethod) -> Self {
        let total = table.total();
        let entries = match sort {
            SortMethod::Value => table.sorted_by_value_desc(),
            SortMethod::Key => table.sorted_by_key(),
        };

        let rows = entries
            .into_iter()
            .map(|(label, value)| SummaryRow {
                label: label.to_string(),
                value,
                percent: if total > 0.0 { value / total * 100.0 } else { 0.0 },
            })
            .collect();

        Self { rows, total, sort }
    }

    /// HTML table with Key/Value/Percentage columns and a bold SUMMARY row
    /// totalling 100%.
    pub fn to_html(&self) -> String {
        if self.rows.is_empty() {
            return r#"<p class="empty-message">No data to display</p>"#.to_string();
        }

        let mut html = String::from(
            "<table class=\"data-table\">\n<thead>\n<tr>\
             <th id=\"sorted-key\">Key</th>\
             <th id=\"sorted-value\">Value</th>\
             <th>Percentage</th></tr>\n</thead>\n<tbody>\n",
        );

        for row in &self.rows {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&row.label),
                format_value(row.value),
                row.percent_display(),
            ));
        }

        html.push_str(&format!(
            "<tr><td><strong>SUMMARY</strong></td>\
             <td><strong>{}</strong></td>\
             <td><strong>100%</strong></td></tr>\n</tbody>\n</table>",
            format_value(self.total),
        ));
        html
    }

    /// Plain-text rendering with aligned columns, for terminal output.
    pub fn to_text(&self) -> String {
        if self.rows.is_empty() {
            return "No data to display".to_string();
        }

        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .chain(["SUMMARY".len()].into_iter())
            .max()
            .unwrap_or(0);

        let mut text = String::new();
        for row in &self.rows {
            text.push_str(&format!(
                "{:<label_width$}  {:>10}  {:>7}\n",
                row.label,
                format_value(row.value),
                row.percent_display(),
            ));
        }
        text.push_str(&format!(
            "{:<label_width$}  {:>10}  {:>7}",
            "SUMMARY",
            format_value(self.total),
            "100%",
        ));
        text
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
