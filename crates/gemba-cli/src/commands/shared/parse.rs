//! Flag parsing shared across handlers.

use gemba_core::entities::Notes;
use gemba_core::sections::{Rating, Section};
use gemba_core::stats::TimeWindow;

/// Parse a `--window` flag, falling back to `default` when absent.
pub fn parse_window(value: Option<&str>, default: TimeWindow) -> anyhow::Result<TimeWindow> {
    match value {
        None => Ok(default),
        Some(value) => TimeWindow::parse(value).ok_or_else(|| {
            anyhow::anyhow!("invalid window '{value}': expected all, 7d, 30d, 90d, or 1y")
        }),
    }
}

/// Parse a `--rating` flag.
pub fn parse_rating(value: &str) -> anyhow::Result<Rating> {
    Rating::parse(value).ok_or_else(|| {
        anyhow::anyhow!("invalid rating '{value}': expected excellent, good, regular, or deficient")
    })
}

/// Parse one `--note <section>:<text>` flag.
pub fn parse_note(value: &str) -> anyhow::Result<(Section, String)> {
    let Some((section, text)) = value.split_once(':') else {
        anyhow::bail!("invalid note '{value}': expected <section>:<text>, e.g. seiri:tools sorted");
    };
    let section = Section::parse(section.trim())
        .ok_or_else(|| anyhow::anyhow!("unknown section '{section}' in note '{value}'"))?;
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("empty note text in '{value}'");
    }
    Ok((section, text.to_string()))
}

/// Collect repeated `--note` flags into the per-section note lists.
pub fn build_notes(specs: &[String]) -> anyhow::Result<Notes> {
    let mut notes: Notes = std::array::from_fn(|_| Vec::new());
    for spec in specs {
        let (section, text) = parse_note(spec)?;
        notes[section.index()].push(text);
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use gemba_core::sections::{Rating, Section};
    use gemba_core::stats::TimeWindow;

    use super::{build_notes, parse_note, parse_rating, parse_window};

    #[test]
    fn window_defaults_when_absent() {
        let window = parse_window(None, TimeWindow::Last30Days).unwrap();
        assert_eq!(window, TimeWindow::Last30Days);
        assert_eq!(parse_window(Some("7d"), TimeWindow::All).unwrap(), TimeWindow::Last7Days);
        assert!(parse_window(Some("2w"), TimeWindow::All).is_err());
    }

    #[test]
    fn rating_parses_bucket_names() {
        assert_eq!(parse_rating("excellent").unwrap(), Rating::Excellent);
        assert!(parse_rating("superb").is_err());
    }

    #[test]
    fn note_splits_on_first_colon() {
        let (section, text) = parse_note("seiri:tools: sorted by size").unwrap();
        assert_eq!(section, Section::Seiri);
        assert_eq!(text, "tools: sorted by size");
    }

    #[test]
    fn note_rejects_bad_shapes() {
        assert!(parse_note("no-colon").is_err());
        assert!(parse_note("kaizen:text").is_err());
        assert!(parse_note("seiri:   ").is_err());
    }

    #[test]
    fn notes_accumulate_per_section() {
        let notes = build_notes(&[
            String::from("seiri:first"),
            String::from("seiri:second"),
            String::from("shitsuke:third"),
        ])
        .unwrap();
        assert_eq!(notes[0], vec!["first", "second"]);
        assert_eq!(notes[4], vec!["third"]);
        assert!(notes[2].is_empty());
    }
}
