//! Title cleanup: strips decorative bracketed annotations and separator suffixes
//! from a comic title, keeping every removed fragment.

use std::ops::Range;

use catalog_lib::error::{Error, Result};
use fancy_regex::Regex;
use once_cell::sync::Lazy;

/// One paired-delimiter (or suffix) removal rule
#[derive(Debug, Clone, Copy)]
pub struct BracketFamily {
    pub name: &'static str,
    pub pattern: &'static str,
}

impl BracketFamily {
    const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self { name, pattern }
    }
}

/// Evaluated in this order; on equal start position the earlier family wins.
pub static BRACKET_FAMILIES: &[BracketFamily] = &[
    BracketFamily::new("parenthesis", r"\([^()]*\)"),
    BracketFamily::new("curly brace", r"\{[^{}]*\}"),
    BracketFamily::new("square bracket", r"\[(?:(?!\]).)*\]"),
    BracketFamily::new("guillemet", r"«[^»]*»"),
    BracketFamily::new("white tortoise shell bracket", r"〘[^〙]*〙"),
    BracketFamily::new("corner bracket", r"「[^」]*」"),
    BracketFamily::new("white corner bracket", r"『[^』]*』"),
    BracketFamily::new("much less-than", r"≪[^≫]*≫"),
    BracketFamily::new("small curly bracket", r"﹛[^﹜]*﹜"),
    BracketFamily::new("white lenticular bracket", r"〖[^〖〗]*〗"),
    BracketFamily::new("bamum letter", r"𖤍.+?𖤍"),
    BracketFamily::new("double angle bracket", r"《[^》]*》"),
    BracketFamily::new("top corner", r"⌜.+?⌝"),
    BracketFamily::new("mathematical angle bracket", r"⟨[^⟩]*⟩"),
    BracketFamily::new("black lenticular bracket", r"【[^】]*】"),
    BracketFamily::new("pipe suffix", r"[|].*"),
    BracketFamily::new("slash suffix", r"[/].*"),
    BracketFamily::new("tilde suffix", r"[~].*"),
    BracketFamily::new("hyphen pair", r"-[^-]*-"),
    BracketFamily::new("single guillemet", r"‹[^›]*›"),
];

static BRACKET_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    BRACKET_FAMILIES
        .iter()
        .filter_map(|family| match Regex::new(family.pattern) {
            Ok(re) => Some((family.name, re)),
            Err(e) => {
                error!("bracket family {} does not compile: {e}", family.name);
                None
            }
        })
        .collect()
});

/// User supplied pattern stripped from titles after bracket removal.
///
/// An empty pattern disables it. The pattern is compiled once here so a bad
/// pattern is reported when configuration is read, not while sanitizing.
#[derive(Debug, Clone, Default)]
pub struct TitlePattern(Option<Regex>);

impl TitlePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self(None));
        }

        Regex::new(pattern)
            .map(|re| Self(Some(re)))
            .map_err(|e| Error::InvalidPattern(format!("`{pattern}`: {e}")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref().map_or("", |re| re.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// Outcome of [`sanitize`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitized {
    pub title: String,
    /// bracket removals in discovery order, then custom pattern removals
    pub removed: Vec<String>,
}

/// Strip decorations from `title`.
///
/// With `shorten`, the leftmost match across [`BRACKET_FAMILIES`] is removed and
/// the rest trimmed, until nothing matches. Then every match of `custom` is
/// removed in a single pass. An empty result is returned as is.
pub fn sanitize(title: &str, shorten: bool, custom: &TitlePattern) -> Sanitized {
    let mut result = title.to_string();
    let mut removed = vec![];

    if shorten {
        // every pass removes a non-empty span, so this ends within title.len() passes
        while let Some(range) = leftmost_bracket(&result) {
            let fragment = result[range.clone()].to_string();
            trace!("removed {fragment:?} from {title:?}");
            result.replace_range(range, "");
            result = result.trim().to_string();
            removed.push(fragment);
        }
    }

    if let Some(re) = &custom.0 {
        let mut stripped = String::with_capacity(result.len());
        let mut last = 0;
        let mut custom_removed: Vec<String> = vec![];
        for found in re.find_iter(&result) {
            let found = match found {
                Ok(found) => found,
                Err(e) => {
                    warn!("custom title pattern {:?} gave up on {title:?}: {e}", re.as_str());
                    break;
                }
            };
            if found.start() == found.end() {
                continue;
            }
            stripped.push_str(&result[last..found.start()]);
            last = found.end();
            if !custom_removed.iter().any(|f| f == found.as_str()) {
                custom_removed.push(found.as_str().to_string());
            }
        }
        stripped.push_str(&result[last..]);

        result = stripped.trim().to_string();
        removed.extend(custom_removed);
    }

    Sanitized {
        title: result,
        removed,
    }
}

fn leftmost_bracket(title: &str) -> Option<Range<usize>> {
    let mut leftmost: Option<Range<usize>> = None;
    for (name, re) in BRACKET_REGEXES.iter() {
        let found = match re.find(title) {
            Ok(Some(found)) if found.start() < found.end() => found.start()..found.end(),
            Ok(_) => continue,
            Err(e) => {
                warn!("bracket family {name} gave up on {title:?}: {e}");
                continue;
            }
        };
        if leftmost.as_ref().is_none_or(|l| found.start < l.start) {
            leftmost = Some(found);
        }
    }

    leftmost
}
