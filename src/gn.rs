/// Inserted at the top of the generated BUILD.gn file.
pub const GENERATED_PREAMBLE: &str = "\
# DO NOT EDIT! This file was generated by gen-build-defs.
# Any changes made to this file will be discarded.

import(\"//third_party/fuchsia-sdk/fuchsia_sdk_pkg.gni\")

";

/// A value assigned to a field in a GN target body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GnValue {
    Str(String),
    List(Vec<String>),
}

/// One GN target definition: a target type, a target name, and an ordered
/// list of body fields. Fields are emitted in insertion order.
#[derive(Debug, Clone)]
pub struct GnTarget {
    target_type: String,
    target_name: String,
    fields: Vec<(String, GnValue)>,
}

impl GnTarget {
    pub fn new(target_type: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            target_name: target_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn str_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), GnValue::Str(value.into())));
        self
    }

    pub fn list_field(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.fields.push((key.into(), GnValue::List(values)));
        self
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Renders the target definition as a GN text block.
    pub fn format(&self) -> String {
        let mut output = format!("{}(\"{}\") {{\n", self.target_type, self.target_name);

        for (key, value) in &self.fields {
            output.push_str(&format!("  {} = {}\n", key, serialize_value(value)));
        }

        output.push('}');
        output
    }
}

/// Serializes a field value in GN-friendly, double-quoted format. Lists of
/// zero or one element stay on one line; longer lists get one element per
/// line.
fn serialize_value(value: &GnValue) -> String {
    match value {
        GnValue::Str(s) => format!("\"{}\"", s),
        GnValue::List(items) => match items.as_slice() {
            [] => "[]".to_string(),
            [only] => format!("[ \"{}\" ]", only),
            many => {
                let quoted: Vec<String> = many.iter().map(|s| format!("\"{}\"", s)).collect();
                format!("[\n    {}\n  ]", quoted.join(",\n    "))
            }
        },
    }
}
