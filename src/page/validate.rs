use std::collections::HashSet;
use std::fmt;

use crate::{
    foundation::core::Rect,
    page::model::{PAGE_VERSION, Page},
};

/// One problem found in a page, located by a JSON path such as `$.sections[2].region`.
#[derive(Debug, Clone)]
pub(crate) struct PageIssue {
    pub(crate) path: String,
    pub(crate) message: String,
}

impl PageIssue {
    fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PageIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Render issues one per line.
pub(crate) fn join_issues(issues: &[PageIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collect every problem in `page` instead of stopping at the first.
pub(crate) fn validate_page(page: &Page) -> Result<(), Vec<PageIssue>> {
    let mut issues = Vec::new();

    if page.version != PAGE_VERSION {
        issues.push(PageIssue::at(
            "$.version",
            format!("version must be \"{PAGE_VERSION}\""),
        ));
    }
    if !page.viewport.is_valid() {
        issues.push(PageIssue::at(
            "$.viewport",
            "viewport width and height must be finite and > 0",
        ));
    }
    // An empty region is allowed (progress degrades to 0); non-finite coordinates are not.
    if let Some(r) = page.tracked_region
        && !rect_is_finite(r)
    {
        issues.push(PageIssue::at(
            "$.tracked_region",
            "tracked_region coordinates must be finite",
        ));
    }

    validate_bindings(page, &mut issues);
    let ids = validate_sections(page, &mut issues);
    validate_nav(page, &ids, &mut issues);
    validate_motion(page, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn rect_is_finite(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}

fn validate_bindings(page: &Page, issues: &mut Vec<PageIssue>) {
    let mut seen = HashSet::new();
    for (i, b) in page.bindings.iter().enumerate() {
        let path = format!("$.bindings[{i}]");
        if b.layer.trim().is_empty() {
            issues.push(PageIssue::at(&path, "layer name must be non-empty"));
        }
        // One writer per (layer, property).
        if !seen.insert((b.layer.as_str(), b.property)) {
            issues.push(PageIssue::at(
                &path,
                format!(
                    "layer '{}' already has a binding for {:?}",
                    b.layer, b.property
                ),
            ));
        }
    }
}

fn validate_sections<'a>(page: &'a Page, issues: &mut Vec<PageIssue>) -> HashSet<&'a str> {
    let mut ids = HashSet::new();
    for (i, s) in page.sections.iter().enumerate() {
        let path = format!("$.sections[{i}]");
        if s.id.trim().is_empty() {
            issues.push(PageIssue::at(&path, "section id must be non-empty"));
        } else if !ids.insert(s.id.as_str()) {
            issues.push(PageIssue::at(&path, format!("duplicate section id '{}'", s.id)));
        }
        if !rect_is_finite(s.region) || s.region.x1 < s.region.x0 || s.region.y1 < s.region.y0 {
            issues.push(PageIssue::at(
                format!("{path}.region"),
                "section region must be finite with x1 >= x0 and y1 >= y0",
            ));
        }
        if let Some(trigger) = &s.reveal
            && let Err(e) = trigger.validate()
        {
            issues.push(PageIssue::at(format!("{path}.reveal"), e.to_string()));
        }
        if let Some(entrance) = &s.entrance
            && let Err(e) = entrance.validate()
        {
            issues.push(PageIssue::at(format!("{path}.entrance"), e.to_string()));
        }
    }
    ids
}

fn validate_nav(page: &Page, ids: &HashSet<&str>, issues: &mut Vec<PageIssue>) {
    for (i, link) in page.nav.iter().enumerate() {
        if !ids.contains(link.target.as_str()) {
            issues.push(PageIssue::at(
                format!("$.nav[{i}].target"),
                format!("nav target '{}' does not name a section", link.target),
            ));
        }
    }
}

fn validate_motion(page: &Page, issues: &mut Vec<PageIssue>) {
    let m = &page.motion;
    let checks = [
        ("entrance", m.entrance.validate()),
        ("card_hover", m.card_hover.validate()),
        ("solution_hover", m.solution_hover.validate()),
        ("marquee", m.marquee.validate()),
    ];
    for (field, res) in checks {
        if let Err(e) = res {
            issues.push(PageIssue::at(format!("$.motion.{field}"), e.to_string()));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/validate.rs"]
mod tests;
