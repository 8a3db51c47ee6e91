//! Inspect report types and terminal formatting.

use std::fmt;

use serde::Serialize;

/// The result of inspecting a dataset.
#[derive(Clone, Debug, Serialize)]
pub struct InspectReport {
    /// Item counts per split.
    pub splits: SplitsSection,
    /// Per-class distribution of the training split.
    pub classes: ClassesSection,
    /// Display options for formatting.
    #[serde(skip)]
    pub(crate) bar_width: usize,
}

/// Item counts per split.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SplitsSection {
    pub train: usize,
    pub val: usize,
    pub test: usize,
    /// True when test is bound to the same items as val.
    pub test_is_val: bool,
}

/// Training items per class.
#[derive(Clone, Debug, Serialize)]
pub struct ClassesSection {
    /// Number of classes (largest train label + 1).
    pub num_classes: usize,
    /// How many top classes to show.
    pub top_n: usize,
    /// Top classes, sorted by count descending then label ascending.
    pub entries: Vec<ClassCount>,
    /// Sum of counts for classes not in the top N.
    pub other_count: usize,
    /// Fewest training items of any present class.
    pub min_per_class: Option<usize>,
    /// Most training items of any present class.
    pub max_per_class: Option<usize>,
}

/// A single class with its training item count.
#[derive(Clone, Debug, Serialize)]
pub struct ClassCount {
    pub label: usize,
    pub classname: String,
    pub count: usize,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "╭─────────────────────────────────────────────────────────────╮")?;
        writeln!(f, "│                  ImageNet Dataset Report                    │")?;
        writeln!(f, "╰─────────────────────────────────────────────────────────────╯")?;
        writeln!(f)?;

        self.fmt_splits(f)?;
        writeln!(f)?;

        self.fmt_classes(f)?;

        Ok(())
    }
}

impl InspectReport {
    fn fmt_splits(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.splits;

        writeln!(f, "┌─ Splits ──────────────────────────────────────────────────┐")?;
        writeln!(f, "│                                                           │")?;
        writeln!(f, "│   Train:    {:>10}                                    │", format_number(s.train))?;
        writeln!(f, "│   Val:      {:>10}                                    │", format_number(s.val))?;
        writeln!(f, "│   Test:     {:>10}                                    │", format_number(s.test))?;
        writeln!(f, "│                                                           │")?;
        if s.test_is_val {
            writeln!(f, "│   Test is bound to the val items.                         │")?;
            writeln!(f, "│                                                           │")?;
        }
        writeln!(f, "└───────────────────────────────────────────────────────────┘")?;

        Ok(())
    }

    fn fmt_classes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.classes;

        let header = if c.num_classes > c.top_n {
            format!("Classes (top {} of {})", c.top_n, c.num_classes)
        } else {
            format!("Classes ({})", c.num_classes)
        };

        writeln!(f, "┌─ {} {}┐", header, "─".repeat(57usize.saturating_sub(header.len())))?;
        writeln!(f, "│                                                           │")?;

        if c.entries.is_empty() {
            writeln!(f, "│   No training items found.                                │")?;
        } else {
            if let (Some(min), Some(max)) = (c.min_per_class, c.max_per_class) {
                writeln!(
                    f,
                    "│   Items per class:   min {:>7}   max {:>7}             │",
                    format_number(min),
                    format_number(max)
                )?;
                writeln!(f, "│                                                           │")?;
            }

            let max_count = c.entries.iter().map(|e| e.count).max().unwrap_or(1);
            for entry in &c.entries {
                let bar = render_bar(entry.count, max_count, self.bar_width);
                writeln!(
                    f,
                    "│ {:>5} {:<20} {:>7}  {}│",
                    entry.label,
                    truncate_label(&entry.classname, 20),
                    format_number(entry.count),
                    pad_bar(&bar, self.bar_width)
                )?;
            }

            if c.other_count > 0 {
                let bar = render_bar(c.other_count, max_count, self.bar_width);
                writeln!(
                    f,
                    "│ {:>5} {:<20} {:>7}  {}│",
                    "",
                    "(other)",
                    format_number(c.other_count),
                    pad_bar(&bar, self.bar_width)
                )?;
            }
        }

        writeln!(f, "│                                                           │")?;
        writeln!(f, "└───────────────────────────────────────────────────────────┘")?;

        Ok(())
    }
}

/// Format a number with thousands separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Render a horizontal bar using Unicode block characters.
fn render_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 || width == 0 {
        return String::new();
    }

    let filled = ((count * width) / max_count).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

fn pad_bar(bar: &str, width: usize) -> String {
    let visual_len = bar.chars().count();
    let padding = (width + 2).saturating_sub(visual_len);
    format!("{}{}", bar, " ".repeat(padding))
}

/// Truncate a class name to fit in the display column.
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_len - 1).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1281167), "1,281,167");
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(render_bar(0, 0, 10), "");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("tench", 10), "tench");
        assert_eq!(truncate_label("great white shark", 10), "great whi…");
        assert_eq!(truncate_label("écrevisse rouge", 5), "écre…");
    }
}
