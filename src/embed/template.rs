//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets.
///
/// `Target` names the template the variables fill, so borrowed variable
/// sets of any lifetime render against a `const` template.
pub trait TemplateVars {
    type Target;

    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<T> {
    content: &'static str,
    _marker: PhantomData<T>,
}

impl<T> Template<T> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<T> Template<T> {
    pub fn render<V: TemplateVars<Target = T>>(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__NAME__` placeholders in one left-to-right pass.
///
/// Inserted values are never rescanned, so page text that happens to
/// contain a placeholder name is emitted as-is.
pub fn substitute(content: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(content.len() + extra);
    let mut rest = content;

    while let Some(start) = rest.find("__") {
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute() {
        let out = substitute("<p>__A__ and __B__</p>", &[("__A__", "x"), ("__B__", "y")]);
        assert_eq!(out, "<p>x and y</p>");
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let out = substitute("__A__|__B__", &[("__A__", "__B__"), ("__B__", "b")]);
        assert_eq!(out, "__B__|b");
    }

    #[test]
    fn test_substitute_keeps_unknown_markers() {
        assert_eq!(substitute("a__b__c", &[("__X__", "x")]), "a__b__c");
        assert_eq!(substitute("trailing __", &[]), "trailing __");
    }
}
