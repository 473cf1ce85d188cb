// ABOUTME: README index rewriting for the deckconv application
// ABOUTME: Regenerates the Presentations section from the current deck set

use crate::config::{Config, LINK_PREFIX, SECTION_HEADING};
use crate::errors::{DeckError, Result};
use crate::scan;
use crate::title::label_and_title;
use crate::utils::write_atomic;
use std::fs;

/// Whether the section heading already existed before the rewrite.
///
/// Purely informational: the rewritten file is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Rewritten,
    Added,
}

/// Regenerate the Presentations section of the README.
///
/// Everything strictly before the first line whose trimmed content equals
/// the section heading is preserved verbatim; the heading and the rest of
/// the file are rebuilt from the deck directory. The README must already
/// exist. The replacement is atomic, so a reader never sees a half-written
/// file and a crash mid-write leaves the original untouched.
pub fn update_readme(config: &Config) -> Result<SectionStatus> {
    let readme = config.readme_path();
    if !readme.is_file() {
        return Err(DeckError::ReadmeNotFoundError(readme));
    }

    let content = fs::read_to_string(&readme).map_err(DeckError::FileReadError)?;
    let mut lines: Vec<String> = Vec::new();
    let mut found = false;
    for line in content.lines() {
        if line.trim() == SECTION_HEADING {
            found = true;
            break;
        }
        lines.push(line.to_string());
    }

    // The preamble ends with exactly one blank line before the heading;
    // an empty preamble gets a single blank line as the boundary.
    let needs_boundary = lines.last().map_or(true, |last| !last.is_empty());
    if needs_boundary {
        lines.push(String::new());
    }

    lines.push(SECTION_HEADING.to_string());
    lines.push(String::new());

    // Same glob as the orchestrator but without the lock-artifact skip:
    // a leftover ~$ deck still gets an index entry.
    for deck in scan::find_decks(config)? {
        let stem = scan::deck_stem(&deck)?;
        let (label, title) = label_and_title(stem);

        lines.push(format!("#### {}. {}", label, title));
        lines.push(format!("- [PowerPoint]({}/{}.pptx)", LINK_PREFIX, stem));
        lines.push(format!("- [PDF]({}/{}.pdf)", LINK_PREFIX, stem));
        lines.push(format!("- [HTML]({}/{}_html/index.html)", LINK_PREFIX, stem));

        let links = config.links_fragment(stem);
        if links.is_file() {
            let fragment = fs::read_to_string(&links).map_err(DeckError::FileReadError)?;
            lines.extend(fragment.lines().map(str::to_string));
        }

        lines.push(String::new());
    }

    write_atomic(&readme, &lines.join("\n"))?;

    Ok(if found {
        SectionStatus::Rewritten
    } else {
        SectionStatus::Added
    })
}
