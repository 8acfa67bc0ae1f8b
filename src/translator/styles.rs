//! The active style-tag stack and the rule table that turns tags into run formatting.

use super::constants::*;
use super::error::{Result, TranslateError};
use crate::config::ConvertConfig;
use crate::models::colors::RgbColor;

/// Stack-backed multiset of active style tags.
#[derive(Debug, Default)]
pub(crate) struct StyleStack {
    tags: Vec<String>,
}

/// Receipt for one `push`; must be handed back to `pop` on every exit path.
#[must_use]
#[derive(Debug)]
pub(crate) struct StyleFrame {
    base: usize,
    tags: Vec<String>,
}

impl StyleStack {
    pub(crate) fn push(&mut self, tags: Vec<String>) -> StyleFrame {
        let base = self.tags.len();
        self.tags.extend(tags.iter().cloned());
        StyleFrame { base, tags }
    }

    /// Removes the tags of `frame`. The stack is always unwound to the frame's
    /// base, even when the top does not hold what the frame pushed.
    pub(crate) fn pop(&mut self, frame: StyleFrame) -> Result<()> {
        let base = frame.base.min(self.tags.len());
        let found = self.tags.split_off(base);
        if frame.base != base || found != frame.tags {
            return Err(TranslateError::StyleMismatch {
                expected: frame.tags,
                found,
            });
        }
        Ok(())
    }

    pub(crate) fn active(&self) -> &[String] {
        &self.tags
    }

    pub(crate) fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// True when text should go to the second body of a two-content slide.
    pub(crate) fn wants_secondary_body(&self) -> bool {
        TWO_CONTENT_MARKERS.iter().any(|m| self.contains(m)) && self.contains(FLOAT_RIGHT)
    }
}

/// Formatting derived from the active tags for one run.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct StyleEffects {
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub color: Option<RgbColor>,
    /// Background fill for the table cell holding the run.
    pub cell_fill: Option<RgbColor>,
    pub unrecognized: Vec<String>,
}

/// Resolves every active tag, in push order, against the rule table.
/// Later tags override earlier ones.
pub(crate) fn resolve_styles(tags: &[String], in_cell: bool, config: &ConvertConfig) -> StyleEffects {
    let mut effects = StyleEffects::default();
    for tag in tags {
        if apply_tag(tag, tags, in_cell, config, &mut effects) {
            continue;
        }
        // Severity tags stand for a highlight tag; resolved once, no further rewriting.
        let rewritten = config
            .severity
            .get(tag.as_str())
            .map(|highlight| apply_highlight(highlight, in_cell, config, &mut effects));
        if rewritten != Some(true) {
            effects.unrecognized.push(tag.clone());
        }
    }
    effects
}

fn apply_tag(
    tag: &str,
    all: &[String],
    in_cell: bool,
    config: &ConvertConfig,
    effects: &mut StyleEffects,
) -> bool {
    let code = &config.code_colors;
    match tag {
        TINY => effects.font_size = Some(config.tiny_font_size),
        SMALL => effects.font_size = Some(config.small_font_size),
        MONOSPACE | PUNCTUATION => effects.font_family = Some(config.monospace_font.clone()),
        KEYWORD | OPERATOR => {
            effects.font_family = Some(config.monospace_font.clone());
            effects.color = Some(code.keyword);
        }
        NAME => {
            effects.font_family = Some(config.monospace_font.clone());
            if all.iter().any(|t| t == FUNCTION) {
                effects.color = Some(code.function);
            }
        }
        LITERAL => {
            effects.font_family = Some(config.monospace_font.clone());
            effects.color = Some(code.literal);
        }
        COMMENT => {
            effects.font_family = Some(config.monospace_font.clone());
            effects.color = Some(code.comment);
        }
        FUNCTION | FLOAT_RIGHT => {}
        t if t.starts_with(LAYOUT_TAG_PREFIX) || TWO_CONTENT_MARKERS.contains(&t) => {}
        t => {
            if let Some(color) = config.palette_color(t) {
                effects.color = Some(color);
            } else {
                return apply_highlight(t, in_cell, config, effects);
            }
        }
    }
    true
}

/// Handles `<color>-hl`: fills the cell inside tables, colors the text elsewhere.
fn apply_highlight(tag: &str, in_cell: bool, config: &ConvertConfig, effects: &mut StyleEffects) -> bool {
    let Some(color) = tag
        .strip_suffix(HIGHLIGHT_SUFFIX)
        .and_then(|name| config.palette_color(name))
    else {
        return false;
    };
    if in_cell {
        effects.cell_fill = Some(color);
    } else {
        effects.color = Some(color);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn push_pop_restores_previous_tags() {
        let mut stack = StyleStack::default();
        let outer = stack.push(tags(&["red"]));
        let inner = stack.push(tags(&["small", "red"]));
        assert_eq!(stack.active(), tags(&["red", "small", "red"]).as_slice());
        stack.pop(inner).unwrap();
        assert_eq!(stack.active(), tags(&["red"]).as_slice());
        stack.pop(outer).unwrap();
        assert!(stack.active().is_empty());
    }

    #[test]
    fn out_of_order_pop_is_a_fault_but_still_unwinds() {
        let mut stack = StyleStack::default();
        let outer = stack.push(tags(&["a"]));
        let _inner = stack.push(tags(&["b"]));
        let err = stack.pop(outer).unwrap_err();
        assert_eq!(
            err,
            TranslateError::StyleMismatch {
                expected: tags(&["a"]),
                found: tags(&["a", "b"]),
            }
        );
        assert!(stack.active().is_empty());
    }

    #[test]
    fn size_and_family_tags() {
        let config = ConvertConfig::default();
        let effects = resolve_styles(&tags(&["tiny", "monospace"]), false, &config);
        assert_eq!(effects.font_size, Some(16.0));
        assert_eq!(effects.font_family.as_deref(), Some("Courier New"));

        let effects = resolve_styles(&tags(&["tiny", "small"]), false, &config);
        assert_eq!(effects.font_size, Some(24.0));
    }

    #[test]
    fn code_tokens_pick_palette_colors() {
        let config = ConvertConfig::default();
        let code = &config.code_colors;
        let color = |t: &[&str]| resolve_styles(&tags(t), false, &config).color;
        assert_eq!(color(&["keyword"]), Some(code.keyword));
        assert_eq!(color(&["operator"]), Some(code.keyword));
        assert_eq!(color(&["name", "function"]), Some(code.function));
        assert_eq!(color(&["name"]), None);
        assert_eq!(color(&["literal"]), Some(code.literal));
        assert_eq!(color(&["comment"]), Some(code.comment));
        assert_eq!(color(&["punctuation"]), None);
    }

    #[test]
    fn highlight_fills_cells_and_colors_text_elsewhere() {
        let config = ConvertConfig::default();
        let red = config.palette_color("red");

        let in_cell = resolve_styles(&tags(&["red-hl"]), true, &config);
        assert_eq!((in_cell.cell_fill, in_cell.color), (red, None));

        let outside = resolve_styles(&tags(&["red-hl"]), false, &config);
        assert_eq!((outside.cell_fill, outside.color), (None, red));
    }

    #[test]
    fn severity_rewrites_to_highlight() {
        let config = ConvertConfig::default();
        let effects = resolve_styles(&tags(&["med"]), true, &config);
        assert_eq!(effects.cell_fill, config.palette_color("yellow"));
        let effects = resolve_styles(&tags(&["showstopper"]), false, &config);
        assert_eq!(effects.color, config.palette_color("red"));
        assert!(effects.unrecognized.is_empty());
    }

    #[test]
    fn unknown_tags_are_reported_not_applied() {
        let config = ConvertConfig::default();
        let effects = resolve_styles(&tags(&["sparkly", "teal-hl", "pptx-segue", "float-right"]), false, &config);
        assert_eq!(effects.unrecognized, tags(&["sparkly", "teal-hl"]));
        assert_eq!(effects.color, None);
    }

    #[test]
    fn secondary_body_needs_both_markers() {
        let mut stack = StyleStack::default();
        let section = stack.push(tags(&["pptx-two-content"]));
        assert!(!stack.wants_secondary_body());
        let right = stack.push(tags(&["float-right"]));
        assert!(stack.wants_secondary_body());
        stack.pop(right).unwrap();
        stack.pop(section).unwrap();
    }
}
