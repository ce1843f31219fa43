//! Note types ("models"): field lists and card templates.

use serde_json::{json, Value};

/// Stylesheet applied to every card of a model unless overridden.
pub const DEFAULT_CSS: &str = ".card {
 font-family: arial;
 font-size: 20px;
 text-align: center;
 color: black;
 background-color: white;
}
";

const LATEX_PRE: &str = "\\documentclass[12pt]{article}
\\special{papersize=3in,5in}
\\usepackage[utf8]{inputenc}
\\usepackage{amssymb,amsmath}
\\pagestyle{empty}
\\setlength{\\parindent}{0in}
\\begin{document}
";

const LATEX_POST: &str = "\\end{document}";

/// A named note field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A card template: one card is generated per template for every note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    /// Front side (question format).
    pub qfmt: String,
    /// Back side (answer format).
    pub afmt: String,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qfmt: String::new(),
            afmt: String::new(),
        }
    }

    pub fn qfmt(mut self, qfmt: impl Into<String>) -> Self {
        self.qfmt = qfmt.into();
        self
    }

    pub fn afmt(mut self, afmt: impl Into<String>) -> Self {
        self.afmt = afmt.into();
        self
    }
}

/// Note type shared by all notes of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub fields: Vec<Field>,
    pub templates: Vec<Template>,
    pub css: String,
}

impl Model {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        fields: Vec<Field>,
        templates: Vec<Template>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
            templates,
            css: DEFAULT_CSS.to_string(),
        }
    }

    /// Ordinal of the field with the given name.
    pub fn field_ordinal(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// For each template, the ordinals of the fields its front side references.
    ///
    /// A card is generated for a template when any of these fields is non-empty.
    pub fn required_fields(&self) -> Vec<Vec<usize>> {
        self.templates
            .iter()
            .map(|template| {
                let mut ords: Vec<usize> = referenced_fields(&template.qfmt)
                    .into_iter()
                    .filter_map(|name| self.field_ordinal(name))
                    .collect();
                ords.sort_unstable();
                ords.dedup();
                ords
            })
            .collect()
    }

    /// JSON stored under this model's id in `col.models`.
    pub(crate) fn to_json(&self, deck_id: i64, modified: i64) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .enumerate()
            .map(|(ord, field)| {
                json!({
                    "name": field.name,
                    "ord": ord,
                    "font": "Arial",
                    "media": [],
                    "rtl": false,
                    "size": 20,
                    "sticky": false,
                })
            })
            .collect();

        let templates: Vec<Value> = self
            .templates
            .iter()
            .enumerate()
            .map(|(ord, template)| {
                json!({
                    "name": template.name,
                    "ord": ord,
                    "qfmt": template.qfmt,
                    "afmt": template.afmt,
                    "bqfmt": "",
                    "bafmt": "",
                    "bfont": "",
                    "bsize": 0,
                    "did": null,
                })
            })
            .collect();

        let req: Vec<Value> = self
            .required_fields()
            .into_iter()
            .enumerate()
            .map(|(ord, fields)| {
                let kind = if fields.is_empty() { "none" } else { "any" };
                json!([ord, kind, fields])
            })
            .collect();

        json!({
            "id": self.id.to_string(),
            "name": self.name,
            "type": 0,
            "mod": modified,
            "usn": -1,
            "sortf": 0,
            "did": deck_id,
            "tmpls": templates,
            "flds": fields,
            "css": self.css,
            "latexPre": LATEX_PRE,
            "latexPost": LATEX_POST,
            "latexsvg": false,
            "req": req,
            "tags": [],
            "vers": [],
        })
    }
}

/// Field names referenced by `{{...}}` tags in a template.
///
/// Section tags (`#`, `^`, `/`), comments (`!`) and the special
/// `FrontSide` reference are skipped; filters such as `type:Answer` resolve to
/// the field after the last colon.
fn referenced_fields(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let tag = after[..end].trim_matches(|c| c == '{' || c == '}').trim();
        rest = &after[end + 2..];

        if tag.is_empty() || tag.starts_with(['#', '^', '/', '!']) {
            continue;
        }
        let name = tag.rsplit(':').next().unwrap_or(tag).trim();
        if name != "FrontSide" && !name.is_empty() {
            names.push(name);
        }
    }

    names
}
